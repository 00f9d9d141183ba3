use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during restaurant operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    #[error("Restaurant not found: {0}")]
    NotFound(String),
    #[error("Restaurant validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RestaurantError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => Self::NotFound(id),
            FrameworkError::Validation(msg) => Self::ValidationError(msg),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}
