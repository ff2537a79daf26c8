use crate::shared::entity::{Entity, ID};
use crate::time_of_day::TimeOfDay;
use chrono::NaiveDate;

/// A `Reminder` represents one recurring daily notification for a specific
/// `MedicineEntry` belonging to a specific `Patient`.
///
/// The trigger fires every day at `remind_at`, but a notification is only
/// dispatched while the reminder `is_active` and the current date falls
/// within `[start_date, end_date]` (both inclusive, unbounded when
/// `end_date` is absent).
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The `Patient` that should receive the notification
    pub patient_id: ID,
    /// The `MedicineEntry` this `Reminder` is about. It is looked up again
    /// at every fire so that edits to the medicine are reflected
    pub medicine_entry_id: ID,
    /// The daily fire time
    pub remind_at: TimeOfDay,
    /// First date (inclusive) on which the reminder is eligible to fire
    pub start_date: NaiveDate,
    /// Last date (inclusive) on which the reminder is eligible to fire
    pub end_date: Option<NaiveDate>,
    /// Soft disable flag, independent of the date range
    pub is_active: bool,
}

impl Reminder {
    pub fn new(
        patient_id: ID,
        medicine_entry_id: ID,
        remind_at: TimeOfDay,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Default::default(),
            patient_id,
            medicine_entry_id,
            remind_at,
            start_date,
            end_date: None,
            is_active: true,
        }
    }
}

impl Entity<ID> for Reminder {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
