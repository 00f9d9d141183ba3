//! # Margin Calculator
//!
//! Cost and margin computation over a [`Dish`] and its ingredients.
//!
//! The arithmetic is exact: every amount is a two-place [`Price`], so
//! `25.00 - (1.20 + 0.12 + 0.06)` is `23.62`, not `23.619999...`.
//!
//! [`unit_margin`] takes the ingredient set in one of two ways:
//!
//! - **Prefetched** - the caller already loaded the ingredients and passes
//!   them in, saving a second round trip to the store.
//! - **Fetched** - the caller passes `None` and the calculator asks its
//!   [`IngredientSource`] for the dish's current ingredients.
//!
//! Both paths compute the same number for the same association. Nothing is
//! cached between calls.

use std::future::Future;

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::domain::{Dish, Ingredient, Price, PRICE_SCALE};

/// Looks up the ingredients currently associated with a dish.
///
/// Errors are handed back to the caller of [`unit_margin`] untouched.
pub trait IngredientSource {
    type Error;

    fn ingredients_for(&self, dish_id: &str) -> impl Future<Output = Result<Vec<Ingredient>, Self::Error>> + Send;
}

/// Price, summed ingredient cost and margin of a dish, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginBreakdown {
    pub price: Price,
    pub total_cost: Price,
    pub margin: Price,
}

/// Sums the unit prices of `ingredients`. An empty collection costs `0.00`.
pub fn total_cost<'a>(ingredients: impl IntoIterator<Item = &'a Ingredient>) -> Price {
    ingredients
        .into_iter()
        .fold(Decimal::new(0, PRICE_SCALE), |total, ingredient| total + ingredient.unit_price)
}

/// Computes the breakdown of `dish` against an explicit ingredient collection.
///
/// The margin is not clamped; an underpriced dish has a negative margin.
pub fn margin_breakdown<'a>(dish: &Dish, ingredients: impl IntoIterator<Item = &'a Ingredient>) -> MarginBreakdown {
    let total_cost = total_cost(ingredients);
    MarginBreakdown {
        price: dish.price,
        total_cost,
        margin: dish.price - total_cost,
    }
}

/// Returns `dish.price` minus the summed unit price of its ingredients.
///
/// With `prefetched` set, those ingredients are the cost basis and `source`
/// is not consulted. Otherwise the ingredients are requested from `source`
/// and any error it returns is propagated as is.
#[instrument(skip(dish, prefetched, source), fields(dish_id = %dish.id, has_prefetched = prefetched.is_some()))]
pub async fn unit_margin<S: IngredientSource>(
    dish: &Dish,
    prefetched: Option<&[Ingredient]>,
    source: &S,
) -> Result<Price, S::Error> {
    let breakdown = match prefetched {
        Some(ingredients) => margin_breakdown(dish, ingredients),
        None => {
            let ingredients = source.ingredients_for(&dish.id).await?;
            margin_breakdown(dish, &ingredients)
        }
    };

    debug!(total_cost = %breakdown.total_cost, margin = %breakdown.margin, "Margin computed");
    Ok(breakdown.margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory source that counts how often it is asked.
    struct FakeSource {
        by_dish: HashMap<String, Vec<Ingredient>>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(dish_id: &str, ingredients: Vec<Ingredient>) -> Self {
            Self {
                by_dish: HashMap::from([(dish_id.to_string(), ingredients)]),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl IngredientSource for FakeSource {
        type Error = String;

        async fn ingredients_for(&self, dish_id: &str) -> Result<Vec<Ingredient>, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.by_dish
                .get(dish_id)
                .cloned()
                .ok_or_else(|| format!("no such dish: {dish_id}"))
        }
    }

    fn ingredient(name: &str, unit_price: Price) -> Ingredient {
        Ingredient::new(format!("ingredient_{name}"), name, unit_price)
    }

    fn dish(price: Price, ingredients: &[Ingredient]) -> Dish {
        Dish::new("dish_1", "Dish 1", price, "restaurant_1", ingredients.iter().map(|i| i.id.clone()))
    }

    #[test]
    fn total_cost_sums_unit_prices() {
        let ingredients = [ingredient("carrot", dec!(0.20)), ingredient("ginger", dec!(0.90))];
        assert_eq!(total_cost(&ingredients), dec!(1.10));
    }

    #[test]
    fn total_cost_of_nothing_is_zero_with_two_places() {
        let none: [Ingredient; 0] = [];
        let cost = total_cost(&none);
        assert_eq!(cost, Decimal::ZERO);
        assert_eq!(cost.to_string(), "0.00");
    }

    #[tokio::test]
    async fn unit_margin_fetches_when_not_prefetched() {
        let ingredients = vec![
            ingredient("pilchard", dec!(1.20)),
            ingredient("yeast", dec!(0.12)),
            ingredient("xantham_gum", dec!(0.06)),
        ];
        let dish = dish(dec!(25.00), &ingredients);
        let source = FakeSource::new("dish_1", ingredients);

        let margin = unit_margin(&dish, None, &source).await.unwrap();
        assert_eq!(margin, dec!(23.62));
        assert_eq!(margin.to_string(), "23.62");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn prefetched_ingredients_skip_the_source_and_agree_with_it() {
        let ingredients = vec![ingredient("saffron", dec!(20.30)), ingredient("ginger", dec!(0.90))];
        let dish = dish(dec!(50.00), &ingredients);
        let source = FakeSource::new("dish_1", ingredients.clone());

        let prefetched = unit_margin(&dish, Some(ingredients.as_slice()), &source).await.unwrap();
        assert_eq!(source.calls(), 0);

        let fetched = unit_margin(&dish, None, &source).await.unwrap();
        assert_eq!(source.calls(), 1);

        assert_eq!(prefetched, dec!(28.80));
        assert_eq!(prefetched, fetched);
    }

    #[tokio::test]
    async fn dish_without_ingredients_keeps_its_full_price() {
        let dish = dish(dec!(15.00), &[]);
        let source = FakeSource::new("dish_1", Vec::new());

        assert_eq!(unit_margin(&dish, None, &source).await, Ok(dec!(15.00)));
    }

    #[tokio::test]
    async fn underpriced_dish_has_negative_margin() {
        let ingredients = vec![ingredient("saffron", dec!(20.30))];
        let dish = dish(dec!(5.00), &ingredients);
        let source = FakeSource::new("dish_1", ingredients);

        assert_eq!(unit_margin(&dish, None, &source).await, Ok(dec!(-15.30)));
    }

    #[tokio::test]
    async fn source_errors_pass_through_unchanged() {
        let dish = dish(dec!(10.00), &[]);
        let source = FakeSource::new("some_other_dish", Vec::new());

        let result = unit_margin(&dish, None, &source).await;
        assert_eq!(result, Err("no such dish: dish_1".to_string()));
    }

    #[test]
    fn breakdown_reports_every_amount() {
        let ingredients = [ingredient("carrot", dec!(0.20)), ingredient("ginger", dec!(0.90))];
        let dish = dish(dec!(3.00), &ingredients);

        let breakdown = margin_breakdown(&dish, &ingredients);
        assert_eq!(
            breakdown,
            MarginBreakdown { price: dec!(3.00), total_cost: dec!(1.10), margin: dec!(1.90) }
        );
    }

    #[test]
    fn calculation_leaves_inputs_untouched() {
        let ingredients = vec![ingredient("carrot", dec!(0.20))];
        let dish = dish(dec!(3.00), &ingredients);
        let before = (dish.clone(), ingredients.clone());

        let _ = margin_breakdown(&dish, &ingredients);
        assert_eq!((dish, ingredients), before);
    }
}
