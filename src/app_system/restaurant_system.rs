use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::actor_framework::{Entity, ResourceActor, ResourceClient};
use crate::clients::{DishClient, IngredientClient, RestaurantClient};
use crate::config::Config;
use crate::domain::{Dish, Ingredient, Restaurant};

/// Starts a store actor whose ids read `{prefix}_1`, `{prefix}_2`, ...
fn spawn_store<T: Entity<Id = String>>(
    prefix: &'static str,
    buffer_size: usize,
) -> (ResourceClient<T>, tokio::task::JoinHandle<()>) {
    let counter = Arc::new(AtomicU64::new(1));
    let next_id = move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst));

    let (actor, client) = ResourceActor::<T>::new(buffer_size, next_id);
    (client, tokio::spawn(actor.run()))
}

/// The application system that owns every record store.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct RestaurantSystem {
    pub restaurant_client: RestaurantClient,
    pub ingredient_client: IngredientClient,
    pub dish_client: DishClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts the restaurant and ingredient stores first, then the dish store
    /// with clients for both.
    #[instrument(name = "restaurant_system", skip(config))]
    pub fn new(config: &Config) -> Self {
        info!(mailbox_capacity = config.mailbox_capacity, "Starting restaurant system");

        let (restaurant_inner, restaurant_handle) = spawn_store::<Restaurant>("restaurant", config.mailbox_capacity);
        let restaurant_client = RestaurantClient::new(restaurant_inner);

        let (ingredient_inner, ingredient_handle) = spawn_store::<Ingredient>("ingredient", config.mailbox_capacity);
        let ingredient_client = IngredientClient::new(ingredient_inner);

        let (dish_inner, dish_handle) = spawn_store::<Dish>("dish", config.mailbox_capacity);
        let dish_client = DishClient::new(dish_inner, restaurant_client.clone(), ingredient_client.clone());

        info!("Restaurant system started successfully");

        Self {
            restaurant_client,
            ingredient_client,
            dish_client,
            handles: vec![restaurant_handle, ingredient_handle, dish_handle],
        }
    }

    /// Drops every client, which closes the store channels, then waits for
    /// the actors to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down restaurant system");

        // The dish client holds clones of the other two, so it goes first.
        drop(self.dish_client);
        drop(self.ingredient_client);
        drop(self.restaurant_client);

        let mut failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                failure.get_or_insert_with(|| format!("Actor task failed: {e:?}"));
            }
        }

        match failure {
            Some(e) => Err(e),
            None => {
                info!("Restaurant system shutdown complete");
                Ok(())
            }
        }
    }
}
