//! Recommendations per quadrant.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{MenuCategory, RecipeMenuMetrics};

/// How urgently a recommendation should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act this period.
    High,
    /// Review soon.
    Medium,
    /// Keep an eye on it.
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// An action suggested for every item in one quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEngineeringRecommendation {
    /// Quadrant the recommendation addresses
    pub category: MenuCategory,
    /// Urgency
    pub priority: Priority,
    /// Short headline
    pub title: String,
    /// What to do
    pub action: String,
    /// Items the recommendation applies to
    pub recipe_ids: Vec<String>,
}

const fn advice(category: MenuCategory) -> (Priority, &'static str, &'static str) {
    match category {
        MenuCategory::Star => (
            Priority::Low,
            "Maintain and promote",
            "Keep recipe and portion consistent, give prime menu placement, \
             and test small price increases.",
        ),
        MenuCategory::CashCow => (
            Priority::Medium,
            "Optimize cost",
            "Review portion size and ingredient sourcing to cut food cost, \
             or raise the price gradually.",
        ),
        MenuCategory::Puzzle => (
            Priority::Medium,
            "Boost marketing",
            "Reposition on the menu, rename or feature the item, and train \
             staff to recommend it.",
        ),
        MenuCategory::Dog => (
            Priority::High,
            "Consider discontinuation",
            "Remove the item or rework it completely unless it serves a \
             strategic purpose.",
        ),
    }
}

/// One recommendation per non-empty quadrant, most urgent first.
#[must_use]
pub fn build_recommendations(items: &[RecipeMenuMetrics]) -> Vec<MenuEngineeringRecommendation> {
    let mut recommendations: Vec<_> = MenuCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let recipe_ids: Vec<String> = items
                .iter()
                .filter(|m| m.category == category)
                .map(|m| m.recipe_id.clone())
                .collect();
            if recipe_ids.is_empty() {
                return None;
            }
            let (priority, title, action) = advice(category);
            Some(MenuEngineeringRecommendation {
                category,
                priority,
                title: title.to_string(),
                action: action.to_string(),
                recipe_ids,
            })
        })
        .collect();

    recommendations.sort_by_key(|r| (r.priority, r.category));
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn metrics(id: &str, category: MenuCategory) -> RecipeMenuMetrics {
        RecipeMenuMetrics {
            recipe_id: id.to_string(),
            name: id.to_string(),
            units_sold: 0,
            menu_mix_percentage: Decimal::ZERO,
            selling_price: Decimal::ZERO,
            cost_per_unit: Decimal::ZERO,
            contribution_margin: Decimal::ZERO,
            total_contribution: Decimal::ZERO,
            popularity_score: Decimal::ZERO,
            profitability_score: Decimal::ZERO,
            category,
        }
    }

    #[test]
    fn test_one_per_category_most_urgent_first() {
        let items = vec![
            metrics("a", MenuCategory::Star),
            metrics("b", MenuCategory::Dog),
            metrics("c", MenuCategory::Star),
            metrics("d", MenuCategory::Puzzle),
        ];
        let recs = build_recommendations(&items);

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].category, MenuCategory::Dog);
        assert_eq!(recs[0].title, "Consider discontinuation");
        assert_eq!(recs[1].category, MenuCategory::Puzzle);
        assert_eq!(recs[1].title, "Boost marketing");
        assert_eq!(recs[2].category, MenuCategory::Star);
        assert_eq!(recs[2].recipe_ids, vec!["a", "c"]);
    }

    #[test]
    fn test_cash_cow_gets_cost_optimization() {
        let recs = build_recommendations(&[metrics("x", MenuCategory::CashCow)]);
        assert_eq!(recs[0].title, "Optimize cost");
        assert_eq!(recs[0].priority, Priority::Medium);
    }

    #[test]
    fn test_empty_menu() {
        assert!(build_recommendations(&[]).is_empty());
    }
}
