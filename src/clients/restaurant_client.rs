use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Restaurant, RestaurantCreate, RestaurantPatch};
use crate::restaurant_actor::RestaurantError;

/// Client for interacting with the Restaurant store.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl_basic_client!(RestaurantClient, Restaurant, RestaurantError, restaurant, restaurants);

impl RestaurantClient {
    #[instrument(skip(self, params), fields(restaurant_name = %params.name))]
    pub async fn create_restaurant(&self, params: RestaurantCreate) -> Result<String, RestaurantError> {
        debug!("Sending request");
        let id = self.inner.create(params).await?;
        info!(restaurant_id = %id, "Restaurant created");
        Ok(id)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_restaurant(&self, id: String, patch: RestaurantPatch) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }
}
