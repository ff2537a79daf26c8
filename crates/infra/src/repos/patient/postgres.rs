use super::IPatientRepo;

use medivault_reminders_domain::{Patient, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresPatientRepo {
    pool: PgPool,
}

impl PostgresPatientRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PatientRaw {
    patient_uid: Uuid,
    full_name: String,
    phone_number: Option<String>,
}

impl Into<Patient> for PatientRaw {
    fn into(self) -> Patient {
        Patient {
            id: self.patient_uid.into(),
            full_name: self.full_name,
            phone_number: self.phone_number,
        }
    }
}

#[async_trait::async_trait]
impl IPatientRepo for PostgresPatientRepo {
    async fn insert(&self, patient: &Patient) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO patients(patient_uid, full_name, phone_number)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(patient.id.inner_ref())
        .bind(&patient.full_name)
        .bind(&patient.phone_number)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, patient_id: &ID) -> Option<Patient> {
        match sqlx::query_as::<_, PatientRaw>(
            r#"
            SELECT * FROM patients AS p
            WHERE p.patient_uid = $1
            "#,
        )
        .bind(patient_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(patient) => Some(patient.into()),
            Err(_) => None,
        }
    }
}
