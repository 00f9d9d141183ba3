use super::Price;

/// A priced component that dishes are made from.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub unit_price: Price,
}

/// Parameters for creating a new ingredient.
#[derive(Debug, Clone)]
pub struct IngredientCreate {
    pub name: String,
    pub unit_price: Price,
}

#[derive(Debug, Clone, Default)]
pub struct IngredientPatch {
    pub name: Option<String>,
    pub unit_price: Option<Price>,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }
}
