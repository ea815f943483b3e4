mod serializable;

mod bytes;
mod unit;
mod wide;

mod containers;
mod scalars;

pub use serializable::*;

pub use bytes::*;
pub use unit::*;
pub use wide::*;
