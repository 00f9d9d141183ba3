pub mod fields;
pub mod money;
pub mod restaurant;
pub mod ingredient;
pub mod dish;

pub use money::*;
pub use restaurant::*;
pub use ingredient::*;
pub use dish::*;
