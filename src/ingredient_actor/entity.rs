use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::fields::{required_text, NAME_MAX_LEN};
use crate::domain::{normalize_price, Ingredient, IngredientCreate, IngredientPatch};

impl Entity for Ingredient {
    type Id = String;
    type CreateParams = IngredientCreate;
    type Patch = IngredientPatch;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: String, params: IngredientCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            name: required_text("name", &params.name, NAME_MAX_LEN).map_err(FrameworkError::Validation)?,
            unit_price: normalize_price("unit_price", params.unit_price).map_err(FrameworkError::Validation)?,
        })
    }

    fn on_update(&mut self, patch: IngredientPatch) -> Result<(), FrameworkError> {
        if let Some(name) = patch.name {
            self.name = required_text("name", &name, NAME_MAX_LEN).map_err(FrameworkError::Validation)?;
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = normalize_price("unit_price", unit_price).map_err(FrameworkError::Validation)?;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), FrameworkError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn unit_price_is_stored_with_two_places() {
        let params = IngredientCreate { name: "Carrot".into(), unit_price: dec!(0.2) };
        let ingredient = Ingredient::from_create_params("ingredient_1".into(), params).unwrap();
        assert_eq!(ingredient.unit_price.to_string(), "0.20");
    }

    #[test]
    fn negative_unit_price_is_rejected() {
        let params = IngredientCreate { name: "Carrot".into(), unit_price: dec!(-0.20) };
        let result = Ingredient::from_create_params("ingredient_1".into(), params);
        assert!(matches!(result, Err(FrameworkError::Validation(_))));
    }
}
