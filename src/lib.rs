pub mod cli;
pub mod config;
pub mod index;
pub mod model;
pub mod persistence;
pub mod report;
pub mod services;
pub mod storage;

pub use config::AppConfig;
pub use index::GroupedIndex;
pub use model::{ElectronicItem, Grade, GroceryItem, InventoryItem, Patient, Prescription, Student};
pub use persistence::{InventoryLogger, PersistenceError};
pub use report::ReportError;
pub use services::{HealthRegistry, WarehouseManager};
pub use storage::{Entity, KeyedRepository, Repository, RepositoryError, Stocked};
