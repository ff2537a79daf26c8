mod medicine_entry;
mod patient;
mod reminder;
mod shared;

use medicine_entry::{InMemoryMedicineEntryRepo, PostgresMedicineEntryRepo};
use patient::{InMemoryPatientRepo, PostgresPatientRepo};
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

pub use medicine_entry::IMedicineEntryRepo;
pub use patient::IPatientRepo;
pub use reminder::IReminderRepo;

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
    pub patients: Arc<dyn IPatientRepo>,
    pub medicine_entries: Arc<dyn IMedicineEntryRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        sqlx::migrate!().run(&pool).await?;

        Ok(Self {
            reminders: Arc::new(PostgresReminderRepo::new(pool.clone())),
            patients: Arc::new(PostgresPatientRepo::new(pool.clone())),
            medicine_entries: Arc::new(PostgresMedicineEntryRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
            patients: Arc::new(InMemoryPatientRepo::new()),
            medicine_entries: Arc::new(InMemoryMedicineEntryRepo::new()),
        }
    }
}
