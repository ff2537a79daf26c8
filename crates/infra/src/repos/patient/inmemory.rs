use super::IPatientRepo;
use crate::repos::shared::inmemory_repo::*;
use medivault_reminders_domain::{Patient, ID};

pub struct InMemoryPatientRepo {
    patients: std::sync::Mutex<Vec<Patient>>,
}

impl InMemoryPatientRepo {
    pub fn new() -> Self {
        Self {
            patients: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IPatientRepo for InMemoryPatientRepo {
    async fn insert(&self, patient: &Patient) -> anyhow::Result<()> {
        insert(patient, &self.patients);
        Ok(())
    }

    async fn find(&self, patient_id: &ID) -> Option<Patient> {
        find(patient_id, &self.patients)
    }
}
