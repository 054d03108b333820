use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::{Entity, Stocked};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectronicItem {
    pub id: u32,
    pub name: String,
    pub quantity: i32,
    pub brand: String,
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        quantity: i32,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }
}

impl Entity for ElectronicItem {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Stocked for ElectronicItem {
    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: u32,
    pub name: String,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: i32, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        self.expiry_date < date
    }
}

impl Entity for GroceryItem {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Stocked for GroceryItem {
    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}
