use tracing::{debug, error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::{IngredientClient, RestaurantClient};
use crate::dish_actor::{DishAction, DishActionResult, DishError};
use crate::domain::{Dish, DishCreate, DishPatch, Ingredient, Price};
use crate::margin::{self, IngredientSource, MarginBreakdown};

/// Client for interacting with the Dish store.
///
/// Besides plain CRUD this client checks references against the restaurant
/// and ingredient stores, and acts as the ingredient source for margin
/// calculations.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
    restaurant_client: RestaurantClient,
    ingredient_client: IngredientClient,
}

impl DishClient {
    pub fn new(
        inner: ResourceClient<Dish>,
        restaurant_client: RestaurantClient,
        ingredient_client: IngredientClient,
    ) -> Self {
        Self {
            inner,
            restaurant_client,
            ingredient_client,
        }
    }

    #[instrument(skip(self, params), fields(dish_name = %params.name, restaurant_id = %params.restaurant_id))]
    pub async fn create_dish(&self, mut params: DishCreate) -> Result<String, DishError> {
        info!("Processing create_dish request (Client Side)");
        params.restaurant_id = params.restaurant_id.trim().to_string();

        // Step 1: Validate restaurant
        self.ensure_restaurant(&params.restaurant_id).await?;

        // Step 2: Validate every referenced ingredient
        for ingredient_id in &params.ingredient_ids {
            self.ensure_ingredient(ingredient_id).await?;
        }

        // Step 3: Create dish in ResourceActor
        let id = self.inner.create(params).await?;
        info!(dish_id = %id, "Dish created");
        Ok(id)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_dish(&self, id: String, mut patch: DishPatch) -> Result<Dish, DishError> {
        debug!("Sending request");
        if let Some(restaurant_id) = patch.restaurant_id.as_mut() {
            *restaurant_id = restaurant_id.trim().to_string();
            self.ensure_restaurant(restaurant_id).await?;
        }
        Ok(self.inner.update(id, patch).await?)
    }

    /// Adds an existing ingredient to the dish. Returns `false` if it was already there.
    #[instrument(skip(self))]
    pub async fn add_ingredient(&self, dish_id: String, ingredient_id: String) -> Result<bool, DishError> {
        debug!("Sending request");
        self.ensure_ingredient(&ingredient_id).await?;
        match self.inner.perform_action(dish_id, DishAction::AddIngredient(ingredient_id)).await? {
            DishActionResult::Added(added) => Ok(added),
            _ => Err(DishError::ActorCommunicationError("Unexpected result".to_string())),
        }
    }

    /// Removes an ingredient from the dish. Returns `false` if it was not there.
    #[instrument(skip(self))]
    pub async fn remove_ingredient(&self, dish_id: String, ingredient_id: String) -> Result<bool, DishError> {
        debug!("Sending request");
        match self.inner.perform_action(dish_id, DishAction::RemoveIngredient(ingredient_id)).await? {
            DishActionResult::Removed(removed) => Ok(removed),
            _ => Err(DishError::ActorCommunicationError("Unexpected result".to_string())),
        }
    }

    /// Loads the ingredients currently associated with a dish.
    ///
    /// # Errors
    /// `NotFound` for an unknown dish, `IngredientNotFound` when the dish
    /// references an ingredient that has since been deleted.
    #[instrument(skip(self))]
    pub async fn get_ingredients_for(&self, dish_id: String) -> Result<Vec<Ingredient>, DishError> {
        let dish = self.require_dish(dish_id).await?;
        self.load_ingredients(&dish).await
    }

    /// Unit margin of a stored dish.
    ///
    /// Pass `prefetched` when the dish's ingredients are already at hand to
    /// skip loading them again. Otherwise the ingredients are resolved from
    /// the same dish snapshot the price is read from.
    #[instrument(skip(self, prefetched))]
    pub async fn unit_margin(&self, dish_id: String, prefetched: Option<&[Ingredient]>) -> Result<Price, DishError> {
        let dish = self.require_dish(dish_id).await?;
        let source = LoadedDish { client: self, dish: &dish };
        let margin = margin::unit_margin(&dish, prefetched, &source).await?;
        info!(margin = %margin, "Unit margin computed");
        Ok(margin)
    }

    /// Price, ingredient cost and margin of a stored dish.
    #[instrument(skip(self))]
    pub async fn margin_breakdown(&self, dish_id: String) -> Result<MarginBreakdown, DishError> {
        let dish = self.require_dish(dish_id).await?;
        let ingredients = self.load_ingredients(&dish).await?;
        Ok(margin::margin_breakdown(&dish, &ingredients))
    }

    async fn require_dish(&self, dish_id: String) -> Result<Dish, DishError> {
        match self.inner.get(dish_id.clone()).await? {
            Some(dish) => Ok(dish),
            None => {
                error!(dish_id = %dish_id, "Dish not found");
                Err(DishError::NotFound(dish_id))
            }
        }
    }

    async fn load_ingredients(&self, dish: &Dish) -> Result<Vec<Ingredient>, DishError> {
        let mut ingredients = Vec::with_capacity(dish.ingredient_ids.len());
        for ingredient_id in &dish.ingredient_ids {
            match self.ingredient_client.get_ingredient(ingredient_id.clone()).await? {
                Some(ingredient) => ingredients.push(ingredient),
                None => {
                    error!(ingredient_id = %ingredient_id, "Dish references a missing ingredient");
                    return Err(DishError::IngredientNotFound(ingredient_id.clone()));
                }
            }
        }
        debug!(count = ingredients.len(), "Ingredients loaded");
        Ok(ingredients)
    }

    async fn ensure_restaurant(&self, restaurant_id: &str) -> Result<(), DishError> {
        match self.restaurant_client.get_restaurant(restaurant_id.to_string()).await {
            Ok(Some(restaurant)) => {
                info!(restaurant_name = %restaurant.name, "Restaurant validation successful");
                Ok(())
            }
            Ok(None) => {
                error!(restaurant_id, "Restaurant not found");
                Err(DishError::InvalidRestaurant(restaurant_id.to_string()))
            }
            Err(e) => {
                error!(error = %e, "Restaurant validation failed");
                Err(e.into())
            }
        }
    }

    async fn ensure_ingredient(&self, ingredient_id: &str) -> Result<(), DishError> {
        match self.ingredient_client.get_ingredient(ingredient_id.to_string()).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                error!(ingredient_id, "Ingredient not found");
                Err(DishError::InvalidIngredient(ingredient_id.to_string()))
            }
            Err(e) => {
                error!(error = %e, "Ingredient validation failed");
                Err(e.into())
            }
        }
    }
}

impl_client_methods!(DishClient, Dish, DishError, dish, dishes);

/// Ingredient source bound to a dish that has already been loaded.
struct LoadedDish<'a> {
    client: &'a DishClient,
    dish: &'a Dish,
}

impl IngredientSource for LoadedDish<'_> {
    type Error = DishError;

    async fn ingredients_for(&self, dish_id: &str) -> Result<Vec<Ingredient>, DishError> {
        if dish_id != self.dish.id {
            return self.client.get_ingredients_for(dish_id.to_string()).await;
        }
        self.client.load_ingredients(self.dish).await
    }
}

impl IngredientSource for DishClient {
    type Error = DishError;

    async fn ingredients_for(&self, dish_id: &str) -> Result<Vec<Ingredient>, DishError> {
        self.get_ingredients_for(dish_id.to_string()).await
    }
}
