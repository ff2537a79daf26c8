use crate::shared::entity::{Entity, ID};

/// The subset of a MediVault user profile that the reminder core needs.
/// The rest of the profile is owned by the records application.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: ID,
    pub full_name: String,
    /// Destination for reminder notifications. A `Patient` without a phone
    /// number never receives a send attempt
    pub phone_number: Option<String>,
}

impl Patient {
    pub fn new(full_name: String) -> Self {
        Self {
            id: Default::default(),
            full_name,
            phone_number: None,
        }
    }
}

impl Entity<ID> for Patient {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
