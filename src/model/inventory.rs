use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::Entity;

/// Entry kept by the JSON inventory log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i32,
    pub date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: i32, date_added: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

impl Entity for InventoryItem {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
