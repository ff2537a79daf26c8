use super::IMedicineEntryRepo;
use crate::repos::shared::inmemory_repo::*;
use medivault_reminders_domain::{MedicineEntry, ID};

pub struct InMemoryMedicineEntryRepo {
    medicine_entries: std::sync::Mutex<Vec<MedicineEntry>>,
}

impl InMemoryMedicineEntryRepo {
    pub fn new() -> Self {
        Self {
            medicine_entries: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IMedicineEntryRepo for InMemoryMedicineEntryRepo {
    async fn insert(&self, medicine_entry: &MedicineEntry) -> anyhow::Result<()> {
        insert(medicine_entry, &self.medicine_entries);
        Ok(())
    }

    async fn find(&self, medicine_entry_id: &ID) -> Option<MedicineEntry> {
        find(medicine_entry_id, &self.medicine_entries)
    }
}
