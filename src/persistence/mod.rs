pub mod error;
pub mod logger;

pub use error::{PersistenceError, PersistenceResult};
pub use logger::InventoryLogger;
