//! Sequence-numbered record parameters for tests.
//!
//! Each call hands out the next number, so names never collide within a
//! test run: `Restaurant 1`, `Restaurant 2`, ...

use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal_macros::dec;

use crate::domain::{DishCreate, IngredientCreate, Price, RestaurantCreate};

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next() -> u64 {
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

pub fn restaurant() -> RestaurantCreate {
    let n = next();
    RestaurantCreate {
        name: format!("Restaurant {n}"),
        address_first_line: format!("{n} Main Street"),
        zip_code: "203302".to_string(),
        phone_number: "555-0100".to_string(),
    }
}

pub fn ingredient(unit_price: Price) -> IngredientCreate {
    IngredientCreate {
        name: format!("Ingredient {}", next()),
        unit_price,
    }
}

pub fn dish(restaurant_id: &str, ingredient_ids: &[String]) -> DishCreate {
    DishCreate {
        name: format!("Dish {}", next()),
        price: dec!(10.00),
        restaurant_id: restaurant_id.to_string(),
        ingredient_ids: ingredient_ids.to_vec(),
    }
}
