use super::IReminderRepo;

use chrono::{NaiveDate, NaiveTime};
use medivault_reminders_domain::{Reminder, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    patient_uid: Uuid,
    medicine_entry_uid: Uuid,
    remind_at: NaiveTime,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    is_active: bool,
}

impl Into<Reminder> for ReminderRaw {
    fn into(self) -> Reminder {
        Reminder {
            id: self.reminder_uid.into(),
            patient_id: self.patient_uid.into(),
            medicine_entry_id: self.medicine_entry_uid.into(),
            remind_at: self.remind_at.into(),
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: self.is_active,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO medication_reminders
            (reminder_uid, patient_uid, medicine_entry_uid, remind_at, start_date, end_date, is_active)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.patient_id.inner_ref())
        .bind(reminder.medicine_entry_id.inner_ref())
        .bind(reminder.remind_at.to_naive())
        .bind(reminder.start_date)
        .bind(reminder.end_date)
        .bind(reminder.is_active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE medication_reminders
            SET remind_at = $2,
            start_date = $3,
            end_date = $4,
            is_active = $5
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(reminder.remind_at.to_naive())
        .bind(reminder.start_date)
        .bind(reminder.end_date)
        .bind(reminder.is_active)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        match sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM medication_reminders AS r
            WHERE r.reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(reminder) => Some(reminder.into()),
            Err(_) => None,
        }
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        match sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM medication_reminders AS r
            WHERE r.reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(reminder) => Some(reminder.into()),
            Err(_) => None,
        }
    }

    async fn find_active(&self) -> Vec<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM medication_reminders AS r
            WHERE r.is_active = TRUE
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .unwrap_or(vec![])
        .into_iter()
        .map(|reminder| reminder.into())
        .collect()
    }

    async fn find_by_patient(&self, patient_id: &ID) -> Vec<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM medication_reminders AS r
            WHERE r.patient_uid = $1
            "#,
        )
        .bind(patient_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or(vec![])
        .into_iter()
        .map(|reminder| reminder.into())
        .collect()
    }
}
