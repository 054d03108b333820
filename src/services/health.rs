use crate::index::GroupedIndex;
use crate::model::{Patient, Prescription};
use crate::storage::Repository;

/// Patients, their prescriptions and a patient-id lookup over the prescriptions.
#[derive(Debug, Default)]
pub struct HealthRegistry {
    patients: Repository<Patient>,
    prescriptions: Repository<Prescription>,
    prescription_map: GroupedIndex<u32, Prescription>,
}

impl HealthRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_patient(&mut self, patient: Patient) {
        self.patients.add(patient);
    }

    pub fn add_prescription(&mut self, prescription: Prescription) {
        self.prescriptions.add(prescription);
    }

    pub fn patients(&self) -> &Repository<Patient> {
        &self.patients
    }

    pub fn prescriptions(&self) -> &Repository<Prescription> {
        &self.prescriptions
    }

    /// Regroups the current prescriptions by patient id. Must be called again
    /// after prescriptions change.
    pub fn build_prescription_map(&mut self) {
        self.prescription_map
            .rebuild(self.prescriptions.get_all(), |p| p.patient_id);
    }

    /// Prescriptions grouped at the last rebuild. The patient id does not have
    /// to belong to a registered patient.
    pub fn prescriptions_for_patient(&self, patient_id: u32) -> &[Prescription] {
        self.prescription_map.lookup(&patient_id)
    }
}
