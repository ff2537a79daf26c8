use crate::error::ScheduleError;
use crate::fire::{fire_reminder, FireOutcome};
use chrono::TimeZone;
use chrono_tz::Tz;
use medivault_reminders_domain::{Reminder, TimeOfDay, ID};
use medivault_reminders_infra::MediVaultContext;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Maintains one recurring daily trigger per scheduled reminder.
///
/// The scheduler is an explicitly constructed instance owned by the
/// composition root. Its only mutable state is the trigger table, guarded
/// by a mutex so that concurrent `schedule`/`remove` calls for the same
/// reminder serialize and the last write wins. The firing path never
/// touches the table, so firing cannot block registration.
#[derive(Clone)]
pub struct ReminderScheduler {
    ctx: MediVaultContext,
    triggers: Arc<Mutex<HashMap<ID, JoinHandle<()>>>>,
}

impl ReminderScheduler {
    pub fn new(ctx: MediVaultContext) -> Self {
        Self {
            ctx,
            triggers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Registers a recurring daily trigger for `reminder`, replacing any
    /// trigger already registered under the same id. The replacement is
    /// atomic: the old timer task is cancelled before the new one spawns,
    /// so a rescheduled reminder can neither double fire nor fall into a
    /// gap.
    ///
    /// Fails synchronously when the reminder's date range is empty; a
    /// malformed reminder never registers a trigger.
    pub fn schedule(&self, reminder: &Reminder) -> Result<(), ScheduleError> {
        if let Some(end_date) = reminder.end_date {
            if end_date < reminder.start_date {
                return Err(ScheduleError::EmptyDateRange {
                    reminder_id: reminder.id.clone(),
                    start_date: reminder.start_date,
                    end_date,
                });
            }
        }

        let mut triggers = self.triggers.lock().unwrap();
        if let Some(old_task) = triggers.remove(&reminder.id) {
            old_task.abort();
        }
        let task = self.spawn_trigger_task(reminder.id.clone(), reminder.remind_at);
        triggers.insert(reminder.id.clone(), task);

        Ok(())
    }

    /// Cancels the trigger for `reminder_id` if one is registered.
    /// Idempotent: removing an unknown id is a no-op. An occurrence that is
    /// already in flight is allowed to complete.
    pub fn remove(&self, reminder_id: &ID) {
        let mut triggers = self.triggers.lock().unwrap();
        if let Some(task) = triggers.remove(reminder_id) {
            task.abort();
        }
    }

    /// Restores triggers for every active reminder in the repository.
    /// Called on startup, before the process starts serving anything else,
    /// so that reminders created before the last restart fire again without
    /// having to be touched first.
    pub async fn schedule_all_active(&self) -> usize {
        let reminders = self.ctx.repos.reminders.find_active().await;
        let mut scheduled = 0;
        for reminder in &reminders {
            match self.schedule(reminder) {
                Ok(()) => scheduled += 1,
                Err(e) => error!(
                    "Unable to restore trigger for reminder: {}. Error message: {:?}",
                    reminder.id, e
                ),
            }
        }
        scheduled
    }

    pub fn is_scheduled(&self, reminder_id: &ID) -> bool {
        self.triggers.lock().unwrap().contains_key(reminder_id)
    }

    pub fn active_trigger_count(&self) -> usize {
        self.triggers.lock().unwrap().len()
    }

    /// Cancels every pending trigger and waits for the timer tasks to wind
    /// down. Occurrences that already spawned are not interrupted.
    pub async fn shutdown(&self) {
        let tasks: Vec<_> = {
            let mut triggers = self.triggers.lock().unwrap();
            triggers.drain().map(|(_, task)| task).collect()
        };
        for task in tasks {
            task.abort();
            let _ = task.await;
        }
    }

    fn spawn_trigger_task(&self, reminder_id: ID, remind_at: TimeOfDay) -> JoinHandle<()> {
        let ctx = self.ctx.clone();
        let timezone = ctx.config.timezone;
        tokio::spawn(async move {
            loop {
                let now = ctx.sys.get_timestamp_millis();
                let wait = millis_until_next_occurrence(now, &remind_at, &timezone);
                tokio::time::sleep(Duration::from_millis(wait as u64)).await;

                // Each occurrence runs on its own task so that a slow
                // gateway call cannot delay this or any other trigger
                let ctx = ctx.clone();
                let reminder_id = reminder_id.clone();
                tokio::spawn(async move {
                    match fire_reminder(&ctx, &reminder_id).await {
                        FireOutcome::Sent => {
                            info!("Reminder: {} dispatched a notification", reminder_id)
                        }
                        FireOutcome::Skipped(reason) => {
                            debug!("Reminder: {} was skipped: {:?}", reminder_id, reason)
                        }
                        FireOutcome::Failed(cause) => {
                            error!("Reminder: {} failed to dispatch: {}", reminder_id, cause)
                        }
                    }
                });
            }
        })
    }
}

/// Milliseconds from `now_millis` until the next occurrence of `remind_at`
/// in `timezone`. An occurrence landing exactly on the current instant is
/// pushed to the next day, so the result is always strictly positive.
fn millis_until_next_occurrence(now_millis: i64, remind_at: &TimeOfDay, timezone: &Tz) -> i64 {
    let now = timezone.timestamp_millis(now_millis);
    let at_today = now.date().and_hms(remind_at.hour(), remind_at.minute(), 0);

    let next = if at_today > now {
        at_today
    } else {
        now.date()
            .succ()
            .and_hms(remind_at.hour(), remind_at.minute(), 0)
    };
    (next - now).num_milliseconds()
}
