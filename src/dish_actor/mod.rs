//! Dish records, including edits to the dish/ingredient association.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
