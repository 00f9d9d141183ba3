//! Ingredient records: name and unit price validation.

pub mod entity;
pub mod error;

pub use error::*;
