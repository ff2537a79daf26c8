mod inmemory;
mod postgres;

pub use inmemory::InMemoryMedicineEntryRepo;
use medivault_reminders_domain::{MedicineEntry, ID};
pub use postgres::PostgresMedicineEntryRepo;

#[async_trait::async_trait]
pub trait IMedicineEntryRepo: Send + Sync {
    async fn insert(&self, medicine_entry: &MedicineEntry) -> anyhow::Result<()>;
    async fn find(&self, medicine_entry_id: &ID) -> Option<MedicineEntry>;
}

#[cfg(test)]
mod tests {
    use crate::MediVaultContext;
    use medivault_reminders_domain::MedicineEntry;

    #[tokio::test]
    async fn test_medicine_entry_lookup() {
        let ctx = MediVaultContext::create_inmemory();

        let medicine =
            MedicineEntry::new(Default::default(), "Paracetamol".into(), "500mg".into());
        ctx.repos
            .medicine_entries
            .insert(&medicine)
            .await
            .expect("To insert medicine entry");

        let found = ctx.repos.medicine_entries.find(&medicine.id).await;
        assert_eq!(found, Some(medicine));
    }
}
