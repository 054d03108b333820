use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Patient {
    pub fn new(id: u32, name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }
}

impl Entity for Patient {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: u32,
    pub patient_id: u32,
    pub medication_name: String,
    pub date_issued: DateTime<Utc>,
}

impl Prescription {
    pub fn new(id: u32, patient_id: u32, medication_name: impl Into<String>) -> Self {
        Self {
            id,
            patient_id,
            medication_name: medication_name.into(),
            date_issued: Utc::now(),
        }
    }

    pub fn issued_at(mut self, date_issued: DateTime<Utc>) -> Self {
        self.date_issued = date_issued;
        self
    }
}

impl Entity for Prescription {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
