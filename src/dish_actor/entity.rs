use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::fields::{required_text, NAME_MAX_LEN};
use crate::domain::{normalize_price, Dish, DishCreate, DishPatch};
use super::actions::{DishAction, DishActionResult};

fn restaurant_ref(value: &str) -> Result<String, FrameworkError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FrameworkError::Validation("restaurant_id is required".to_string()));
    }
    Ok(trimmed.to_string())
}

impl Entity for Dish {
    type Id = String;
    type CreateParams = DishCreate;
    type Patch = DishPatch;
    type Action = DishAction;
    type ActionResult = DishActionResult;

    /// Creates a new Dish. Repeated ingredient ids collapse into the set.
    fn from_create_params(id: String, params: DishCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            name: required_text("name", &params.name, NAME_MAX_LEN).map_err(FrameworkError::Validation)?,
            price: normalize_price("price", params.price).map_err(FrameworkError::Validation)?,
            restaurant_id: restaurant_ref(&params.restaurant_id)?,
            ingredient_ids: params.ingredient_ids.into_iter().collect(),
        })
    }

    fn on_update(&mut self, patch: DishPatch) -> Result<(), FrameworkError> {
        if let Some(name) = patch.name {
            self.name = required_text("name", &name, NAME_MAX_LEN).map_err(FrameworkError::Validation)?;
        }
        if let Some(price) = patch.price {
            self.price = normalize_price("price", price).map_err(FrameworkError::Validation)?;
        }
        if let Some(restaurant_id) = patch.restaurant_id {
            self.restaurant_id = restaurant_ref(&restaurant_id)?;
        }
        Ok(())
    }

    /// Handles dish-specific actions.
    ///
    /// # Actions
    /// - `AddIngredient(id)`: Inserts the id into the ingredient set
    /// - `RemoveIngredient(id)`: Removes the id from the ingredient set
    fn handle_action(&mut self, action: DishAction) -> Result<DishActionResult, FrameworkError> {
        match action {
            DishAction::AddIngredient(ingredient_id) => {
                Ok(DishActionResult::Added(self.ingredient_ids.insert(ingredient_id)))
            }
            DishAction::RemoveIngredient(ingredient_id) => {
                Ok(DishActionResult::Removed(self.ingredient_ids.remove(&ingredient_id)))
            }
        }
    }
}
