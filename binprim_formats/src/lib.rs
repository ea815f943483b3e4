//! Concrete wire formats for [`binprim_types`].
//!
//! - [`CanonicalFormat`]: deterministic; the only encoding of a value is accepted.
//! - [`FastFormat`]: fixed-width lengths, no ordering rules.

mod any;
pub mod canonical;
pub mod fast;
mod uleb128;

pub use any::*;
pub use canonical::CanonicalFormat;
pub use fast::FastFormat;
