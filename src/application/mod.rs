// Application layer - owns the mutable ledger and validates what goes in.
// The pure operations live in `domain`; everything here is the caller side.

pub mod error;
pub mod tracker;

pub use error::*;
pub use tracker::*;
