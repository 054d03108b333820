pub mod display;
pub mod interface;

pub use interface::{run, Cli, Commands, InventoryCommand};
