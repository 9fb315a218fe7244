//! # Value Carriers
//!
//! | Type | Purpose |
//! |------|---------|
//! | `Field` | Already-typed value handed to a setting by a parser or decoder |

mod field;

pub use field::Field;
