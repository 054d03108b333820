pub mod error;
pub mod keyed;
pub mod record;
pub mod repository;

pub use error::{RepositoryError, RepositoryResult};
pub use keyed::KeyedRepository;
pub use record::{Entity, Stocked};
pub use repository::Repository;
