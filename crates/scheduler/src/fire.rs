use medivault_reminders_domain::{MedicineEntry, TimeOfDay, ID};
use medivault_reminders_infra::MediVaultContext;

/// Outcome of one occurrence of a reminder trigger.
///
/// Firing never raises: anything that prevents a send is reported as a
/// variant here and logged by the trigger loop.
#[derive(Debug, Clone, PartialEq)]
pub enum FireOutcome {
    /// The notification was handed off to the gateway
    Sent,
    /// The reminder was not eligible at this occurrence, nothing was sent
    Skipped(SkipReason),
    /// The gateway did not accept the send. The next daily occurrence is
    /// the natural retry
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    ReminderNotFound,
    Inactive,
    NotStarted,
    Expired,
    PatientNotFound,
    MedicineEntryNotFound,
    MissingPhoneNumber,
}

/// Re-reads the reminder and its linked records and dispatches the
/// notification when every eligibility check passes.
///
/// Everything is fetched fresh from the repos on each invocation, so edits
/// made since the trigger was registered are reflected and the handler has
/// no mid-flight state that a concurrent occurrence could interfere with.
pub(crate) async fn fire_reminder(ctx: &MediVaultContext, reminder_id: &ID) -> FireOutcome {
    let reminder = match ctx.repos.reminders.find(reminder_id).await {
        Some(reminder) => reminder,
        None => return FireOutcome::Skipped(SkipReason::ReminderNotFound),
    };
    if !reminder.is_active {
        return FireOutcome::Skipped(SkipReason::Inactive);
    }

    let today = ctx.sys.today(&ctx.config.timezone);
    if today < reminder.start_date {
        return FireOutcome::Skipped(SkipReason::NotStarted);
    }
    if let Some(end_date) = reminder.end_date {
        if today > end_date {
            return FireOutcome::Skipped(SkipReason::Expired);
        }
    }

    let patient = match ctx.repos.patients.find(&reminder.patient_id).await {
        Some(patient) => patient,
        None => return FireOutcome::Skipped(SkipReason::PatientNotFound),
    };
    let medicine_entry = match ctx
        .repos
        .medicine_entries
        .find(&reminder.medicine_entry_id)
        .await
    {
        Some(medicine_entry) => medicine_entry,
        None => return FireOutcome::Skipped(SkipReason::MedicineEntryNotFound),
    };
    let phone_number = match patient.phone_number {
        Some(phone_number) => phone_number,
        None => return FireOutcome::Skipped(SkipReason::MissingPhoneNumber),
    };

    let message = reminder_sms_text(&medicine_entry, &reminder.remind_at);
    if ctx.sms.send(&phone_number, &message).await {
        FireOutcome::Sent
    } else {
        FireOutcome::Failed("The sms gateway did not accept the send".into())
    }
}

fn reminder_sms_text(medicine_entry: &MedicineEntry, remind_at: &TimeOfDay) -> String {
    format!(
        "MediVault Reminder: Time to take {} - {} at {}",
        medicine_entry.name, medicine_entry.dosage, remind_at
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use medivault_reminders_domain::{MedicineEntry, Patient, Reminder, TimeOfDay};
    use medivault_reminders_infra::{ISys, InMemorySmsGateway, MediVaultContext};
    use std::sync::Arc;

    /// Sun Feb 21 2021 09:00:00 UTC
    const NOW: i64 = 1613898000000;

    struct StaticTimeSys(i64);
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd(year, month, day)
    }

    struct TestContext {
        ctx: MediVaultContext,
        sms: Arc<InMemorySmsGateway>,
        reminder: Reminder,
        patient: Patient,
    }

    /// An eligible reminder for Paracetamol at 09:00, due since Feb 1 2021,
    /// with the clock frozen at Feb 21 2021 09:00 UTC.
    async fn setup() -> TestContext {
        let sms = Arc::new(InMemorySmsGateway::new());
        let mut ctx = MediVaultContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(NOW));
        ctx.sms = sms.clone();

        let mut patient = Patient::new("Asha Rao".into());
        patient.phone_number = Some("9876543210".into());
        ctx.repos.patients.insert(&patient).await.unwrap();

        let medicine_entry =
            MedicineEntry::new(Default::default(), "Paracetamol".into(), "500mg".into());
        ctx.repos
            .medicine_entries
            .insert(&medicine_entry)
            .await
            .unwrap();

        let reminder = Reminder::new(
            patient.id.clone(),
            medicine_entry.id.clone(),
            TimeOfDay::new(9, 0).unwrap(),
            date(2021, 2, 1),
        );
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        TestContext {
            ctx,
            sms,
            reminder,
            patient,
        }
    }

    #[tokio::test]
    async fn eligible_reminder_dispatches_exactly_one_notification() {
        let TestContext {
            ctx, sms, reminder, ..
        } = setup().await;

        let outcome = fire_reminder(&ctx, &reminder.id).await;
        assert_eq!(outcome, FireOutcome::Sent);

        let sent = sms.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "9876543210");
        assert_eq!(
            sent[0].body,
            "MediVault Reminder: Time to take Paracetamol - 500mg at 09:00"
        );
    }

    #[tokio::test]
    async fn inactive_reminder_is_skipped() {
        let TestContext {
            ctx,
            sms,
            mut reminder,
            ..
        } = setup().await;
        reminder.is_active = false;
        ctx.repos.reminders.save(&reminder).await.unwrap();

        let outcome = fire_reminder(&ctx, &reminder.id).await;
        assert_eq!(outcome, FireOutcome::Skipped(SkipReason::Inactive));
        assert!(sms.sent().is_empty());
    }

    #[tokio::test]
    async fn deleted_reminder_is_skipped() {
        let TestContext {
            ctx, sms, reminder, ..
        } = setup().await;
        ctx.repos.reminders.delete(&reminder.id).await.unwrap();

        let outcome = fire_reminder(&ctx, &reminder.id).await;
        assert_eq!(outcome, FireOutcome::Skipped(SkipReason::ReminderNotFound));
        assert!(sms.sent().is_empty());
    }

    #[tokio::test]
    async fn reminder_does_not_fire_before_its_start_date() {
        let TestContext {
            ctx,
            sms,
            mut reminder,
            ..
        } = setup().await;
        // Today is Feb 21
        reminder.start_date = date(2021, 2, 22);
        ctx.repos.reminders.save(&reminder).await.unwrap();

        let outcome = fire_reminder(&ctx, &reminder.id).await;
        assert_eq!(outcome, FireOutcome::Skipped(SkipReason::NotStarted));
        assert!(sms.sent().is_empty());
    }

    #[tokio::test]
    async fn reminder_fires_on_its_start_date() {
        let TestContext {
            ctx,
            sms,
            mut reminder,
            ..
        } = setup().await;
        reminder.start_date = date(2021, 2, 21);
        ctx.repos.reminders.save(&reminder).await.unwrap();

        assert_eq!(fire_reminder(&ctx, &reminder.id).await, FireOutcome::Sent);
        assert_eq!(sms.sent().len(), 1);
    }

    #[tokio::test]
    async fn reminder_does_not_fire_after_its_end_date() {
        let TestContext {
            ctx,
            sms,
            mut reminder,
            ..
        } = setup().await;
        reminder.end_date = Some(date(2021, 2, 20));
        ctx.repos.reminders.save(&reminder).await.unwrap();

        let outcome = fire_reminder(&ctx, &reminder.id).await;
        assert_eq!(outcome, FireOutcome::Skipped(SkipReason::Expired));
        assert!(sms.sent().is_empty());
    }

    #[tokio::test]
    async fn reminder_fires_on_its_end_date() {
        let TestContext {
            ctx,
            sms,
            mut reminder,
            ..
        } = setup().await;
        // The end date bound is inclusive
        reminder.end_date = Some(date(2021, 2, 21));
        ctx.repos.reminders.save(&reminder).await.unwrap();

        assert_eq!(fire_reminder(&ctx, &reminder.id).await, FireOutcome::Sent);
        assert_eq!(sms.sent().len(), 1);
    }

    #[tokio::test]
    async fn patient_without_phone_number_is_skipped_silently() {
        let TestContext {
            ctx, sms, reminder, ..
        } = setup().await;

        let patient_without_phone = Patient::new("Ravi Iyer".into());
        ctx.repos.patients.insert(&patient_without_phone).await.unwrap();
        let mut reminder = reminder;
        reminder.patient_id = patient_without_phone.id;
        ctx.repos.reminders.save(&reminder).await.unwrap();

        let outcome = fire_reminder(&ctx, &reminder.id).await;
        assert_eq!(
            outcome,
            FireOutcome::Skipped(SkipReason::MissingPhoneNumber)
        );
        assert!(sms.sent().is_empty());
    }

    #[tokio::test]
    async fn missing_linked_records_are_skipped_silently() {
        let TestContext {
            ctx,
            sms,
            mut reminder,
            ..
        } = setup().await;

        reminder.patient_id = Default::default();
        ctx.repos.reminders.save(&reminder).await.unwrap();
        assert_eq!(
            fire_reminder(&ctx, &reminder.id).await,
            FireOutcome::Skipped(SkipReason::PatientNotFound)
        );

        let TestContext {
            ctx,
            sms: sms2,
            mut reminder,
            ..
        } = setup().await;
        reminder.medicine_entry_id = Default::default();
        ctx.repos.reminders.save(&reminder).await.unwrap();
        assert_eq!(
            fire_reminder(&ctx, &reminder.id).await,
            FireOutcome::Skipped(SkipReason::MedicineEntryNotFound)
        );

        assert!(sms.sent().is_empty());
        assert!(sms2.sent().is_empty());
    }

    #[tokio::test]
    async fn medicine_edits_are_reflected_at_fire_time() {
        let TestContext {
            ctx, sms, reminder, ..
        } = setup().await;

        // The original entry is not updated in place: the reminder is
        // repointed at a new entry, as the records application does when a
        // prescription is reissued
        let renamed =
            MedicineEntry::new(Default::default(), "Ibuprofen".into(), "200mg".into());
        ctx.repos.medicine_entries.insert(&renamed).await.unwrap();
        let mut reminder = reminder;
        reminder.medicine_entry_id = renamed.id;
        ctx.repos.reminders.save(&reminder).await.unwrap();

        assert_eq!(fire_reminder(&ctx, &reminder.id).await, FireOutcome::Sent);
        assert_eq!(
            sms.sent()[0].body,
            "MediVault Reminder: Time to take Ibuprofen - 200mg at 09:00"
        );
    }

    #[tokio::test]
    async fn gateway_failure_is_contained() {
        let TestContext {
            ctx,
            reminder,
            patient,
            ..
        } = setup().await;
        let mut ctx = ctx;
        ctx.sms = Arc::new(InMemorySmsGateway::failing());

        let outcome = fire_reminder(&ctx, &reminder.id).await;
        assert!(matches!(outcome, FireOutcome::Failed(_)));

        // The reminder record is untouched so the next occurrence retries
        let found = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert!(found.is_active);
        assert_eq!(found.patient_id, patient.id);
    }
}
