//! Typed, traced handles over the record stores.

#[macro_use]
mod macros;

pub mod restaurant_client;
pub mod ingredient_client;
pub mod dish_client;

pub use restaurant_client::RestaurantClient;
pub use ingredient_client::IngredientClient;
pub use dish_client::DishClient;
