mod health;
mod inventory;
mod student;
mod warehouse;

pub use health::{Patient, Prescription};
pub use inventory::InventoryItem;
pub use student::{Grade, Student};
pub use warehouse::{ElectronicItem, GroceryItem};
