pub mod health;
pub mod warehouse;

pub use health::HealthRegistry;
pub use warehouse::{increase_stock, remove_item, WarehouseManager};
