//! Core types for Villa Markets.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod money;
pub mod status;

pub use category::Category;
pub use id::*;
pub use money::Money;
pub use status::*;
