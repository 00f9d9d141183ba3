//! Restaurant records: field validation and errors.

pub mod entity;
pub mod error;

pub use error::*;
