use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Ingredient, IngredientCreate, IngredientPatch};
use crate::ingredient_actor::IngredientError;

/// Client for interacting with the Ingredient store.
#[derive(Clone)]
pub struct IngredientClient {
    inner: ResourceClient<Ingredient>,
}

impl_basic_client!(IngredientClient, Ingredient, IngredientError, ingredient, ingredients);

impl IngredientClient {
    #[instrument(skip(self, params), fields(ingredient_name = %params.name, unit_price = %params.unit_price))]
    pub async fn create_ingredient(&self, params: IngredientCreate) -> Result<String, IngredientError> {
        debug!("Sending request");
        let id = self.inner.create(params).await?;
        info!(ingredient_id = %id, "Ingredient created");
        Ok(id)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_ingredient(&self, id: String, patch: IngredientPatch) -> Result<Ingredient, IngredientError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }
}
