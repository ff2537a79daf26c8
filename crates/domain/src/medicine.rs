use crate::shared::entity::{Entity, ID};

/// One medicine line on a prescription: what to take and how.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicineEntry {
    pub id: ID,
    /// The prescription this entry belongs to. Prescriptions themselves are
    /// owned by the records application, not by this service
    pub prescription_id: ID,
    pub name: String,
    pub dosage: String,
    pub frequency: Option<String>,
    pub timing: Option<String>,
}

impl MedicineEntry {
    pub fn new(prescription_id: ID, name: String, dosage: String) -> Self {
        Self {
            id: Default::default(),
            prescription_id,
            name,
            dosage,
            frequency: None,
            timing: None,
        }
    }
}

impl Entity<ID> for MedicineEntry {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
