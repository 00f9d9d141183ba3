use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::ingredient_actor::IngredientError;
use crate::restaurant_actor::RestaurantError;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    #[error("Dish not found: {0}")]
    NotFound(String),
    #[error("Invalid restaurant: {0}")]
    InvalidRestaurant(String),
    #[error("Invalid ingredient: {0}")]
    InvalidIngredient(String),
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),
    #[error("Dish validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for DishError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => Self::NotFound(id),
            FrameworkError::Validation(msg) => Self::ValidationError(msg),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<IngredientError> for DishError {
    fn from(e: IngredientError) -> Self {
        match e {
            IngredientError::NotFound(id) => Self::IngredientNotFound(id),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<RestaurantError> for DishError {
    fn from(e: RestaurantError) -> Self {
        match e {
            RestaurantError::NotFound(id) => Self::InvalidRestaurant(id),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}
