mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
use medivault_reminders_domain::{Reminder, ID};
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// Every reminder with the active flag set. Used to rebuild triggers
    /// on startup
    async fn find_active(&self) -> Vec<Reminder>;
    async fn find_by_patient(&self, patient_id: &ID) -> Vec<Reminder>;
}
