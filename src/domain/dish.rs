use std::collections::BTreeSet;

use super::Price;

/// A priced menu item belonging to one restaurant.
///
/// Ingredients are held by id; the set keeps each ingredient at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub restaurant_id: String,
    pub ingredient_ids: BTreeSet<String>,
}

/// Parameters for creating a new dish. Repeated ingredient ids collapse to one.
#[derive(Debug, Clone)]
pub struct DishCreate {
    pub name: String,
    pub price: Price,
    pub restaurant_id: String,
    pub ingredient_ids: Vec<String>,
}

/// Field updates for an existing dish.
///
/// The ingredient set is edited through dish actions, not patches.
#[derive(Debug, Clone, Default)]
pub struct DishPatch {
    pub name: Option<String>,
    pub price: Option<Price>,
    pub restaurant_id: Option<String>,
}

impl Dish {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Price,
        restaurant_id: impl Into<String>,
        ingredient_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            restaurant_id: restaurant_id.into(),
            ingredient_ids: ingredient_ids.into_iter().map(Into::into).collect(),
        }
    }
}
