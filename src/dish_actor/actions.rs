/// Custom actions for Dish entities.
///
/// These edit the many-to-many association with ingredients. Existence of the
/// ingredient is checked by the client before the action is sent.
#[derive(Debug, Clone, PartialEq)]
pub enum DishAction {
    /// Adds an ingredient id to the dish.
    AddIngredient(String),
    /// Removes an ingredient id from the dish.
    RemoveIngredient(String),
}

/// Results from DishActions - variants match 1:1 with DishAction
#[derive(Debug, Clone, PartialEq)]
pub enum DishActionResult {
    /// `false` when the ingredient was already present
    Added(bool),
    /// `false` when the ingredient was not present
    Removed(bool),
}
