mod medicine;
mod patient;
mod reminder;
mod shared;
mod time_of_day;

pub use medicine::MedicineEntry;
pub use patient::Patient;
pub use reminder::Reminder;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use time_of_day::{InvalidTimeOfDay, TimeOfDay};
