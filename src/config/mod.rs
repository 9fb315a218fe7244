//! # Configuration Module
//!
//! Centralizes wire limits and setting defaults. Interdependent values are
//! co-located in [`constants`] and enforced with compile-time assertions.

pub mod constants;
pub use constants::*;
