pub mod grouped;

pub use grouped::GroupedIndex;
