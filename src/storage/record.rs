use std::fmt::{Debug, Display};

/// A record with an identifier that repositories can look up.
pub trait Entity {
    type Id: Copy + Eq + Debug + Display;

    fn id(&self) -> Self::Id;
}

/// An entity carrying a stock quantity.
pub trait Stocked: Entity {
    fn quantity(&self) -> i32;

    fn set_quantity(&mut self, quantity: i32);
}
