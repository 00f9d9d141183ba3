mod domain;
mod clients;
mod config;
mod margin;

mod app_system;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod fixtures;

mod actor_framework;
mod restaurant_actor;
mod ingredient_actor;
mod dish_actor;

use rust_decimal_macros::dec;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, RestaurantSystem};
use crate::config::Config;
use crate::domain::{DishCreate, IngredientCreate, RestaurantCreate};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting restaurant system demo");

    let config = Config::load();
    let system = RestaurantSystem::new(&config);

    let span = tracing::info_span!("restaurant_creation");
    let restaurant_id = async {
        info!("Creating restaurant");
        system
            .restaurant_client
            .create_restaurant(RestaurantCreate {
                name: "Harbour Kitchen".to_string(),
                address_first_line: "123 Main Street".to_string(),
                zip_code: "203302".to_string(),
                phone_number: "555-0100".to_string(),
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let mut ingredient_ids = Vec::new();
    for (name, unit_price) in [("pilchard", dec!(1.20)), ("yeast", dec!(0.12)), ("xantham_gum", dec!(0.06))] {
        let id = system
            .ingredient_client
            .create_ingredient(IngredientCreate { name: name.to_string(), unit_price })
            .await
            .map_err(|e| e.to_string())?;
        ingredient_ids.push(id);
    }

    let dish_id = system
        .dish_client
        .create_dish(DishCreate {
            name: "Stargazy Pie".to_string(),
            price: dec!(25.00),
            restaurant_id,
            ingredient_ids,
        })
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("margin_report");
    let report = async {
        info!("Computing margin");
        system.dish_client.margin_breakdown(dish_id.clone()).await
    }
    .instrument(span)
    .await;

    match report {
        Ok(breakdown) => info!(
            dish_id = %dish_id,
            price = %breakdown.price,
            total_cost = %breakdown.total_cost,
            margin = %breakdown.margin,
            "Margin report"
        ),
        Err(e) => error!(error = %e, "Margin report failed"),
    }

    let span = tracing::info_span!("unit_margin");
    let margins = async {
        let ingredients = system.dish_client.get_ingredients_for(dish_id.clone()).await?;
        let prefetched = system.dish_client.unit_margin(dish_id.clone(), Some(ingredients.as_slice())).await?;
        let fetched = system.dish_client.unit_margin(dish_id.clone(), None).await?;
        Ok::<_, dish_actor::DishError>((prefetched, fetched))
    }
    .instrument(span)
    .await;

    match margins {
        Ok((prefetched, fetched)) => info!(
            dish_id = %dish_id,
            prefetched = %prefetched,
            fetched = %fetched,
            "Unit margin with and without prefetched ingredients"
        ),
        Err(e) => error!(error = %e, "Unit margin failed"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
