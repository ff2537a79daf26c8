mod inmemory;
mod postgres;

pub use inmemory::InMemoryPatientRepo;
use medivault_reminders_domain::{Patient, ID};
pub use postgres::PostgresPatientRepo;

#[async_trait::async_trait]
pub trait IPatientRepo: Send + Sync {
    async fn insert(&self, patient: &Patient) -> anyhow::Result<()>;
    async fn find(&self, patient_id: &ID) -> Option<Patient>;
}
