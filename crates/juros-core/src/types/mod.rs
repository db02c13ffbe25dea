//! Domain types for the juros library.
//!
//! Newtypes keep dates and market identifiers from being confused with
//! raw values at API boundaries.

mod date;
mod market;

pub use date::Date;
pub use market::Market;
