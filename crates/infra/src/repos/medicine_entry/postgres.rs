use super::IMedicineEntryRepo;

use medivault_reminders_domain::{MedicineEntry, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresMedicineEntryRepo {
    pool: PgPool,
}

impl PostgresMedicineEntryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MedicineEntryRaw {
    medicine_entry_uid: Uuid,
    prescription_uid: Uuid,
    name: String,
    dosage: String,
    frequency: Option<String>,
    timing: Option<String>,
}

impl Into<MedicineEntry> for MedicineEntryRaw {
    fn into(self) -> MedicineEntry {
        MedicineEntry {
            id: self.medicine_entry_uid.into(),
            prescription_id: self.prescription_uid.into(),
            name: self.name,
            dosage: self.dosage,
            frequency: self.frequency,
            timing: self.timing,
        }
    }
}

#[async_trait::async_trait]
impl IMedicineEntryRepo for PostgresMedicineEntryRepo {
    async fn insert(&self, medicine_entry: &MedicineEntry) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO medicine_entries
            (medicine_entry_uid, prescription_uid, name, dosage, frequency, timing)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(medicine_entry.id.inner_ref())
        .bind(medicine_entry.prescription_id.inner_ref())
        .bind(&medicine_entry.name)
        .bind(&medicine_entry.dosage)
        .bind(&medicine_entry.frequency)
        .bind(&medicine_entry.timing)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, medicine_entry_id: &ID) -> Option<MedicineEntry> {
        match sqlx::query_as::<_, MedicineEntryRaw>(
            r#"
            SELECT * FROM medicine_entries AS m
            WHERE m.medicine_entry_uid = $1
            "#,
        )
        .bind(medicine_entry_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(medicine_entry) => Some(medicine_entry.into()),
            Err(_) => None,
        }
    }
}
