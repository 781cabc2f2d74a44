//! References to the items a recipe consumes or produces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inventory item with its current cost per unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable identifier of the item
    pub id: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cost per unit of the item, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<Decimal>,
}

impl Item {
    /// Create an item with no name or cost.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            unit_cost: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the cost per unit.
    #[must_use]
    pub const fn with_unit_cost(mut self, unit_cost: Decimal) -> Self {
        self.unit_cost = Some(unit_cost);
        self
    }
}

/// Either a bare item id or an embedded item.
///
/// A bare id carries no cost information; inputs that reference an item by id
/// need a `unitCostOverride` to contribute to the materials cost.
///
/// In JSON, a string deserializes to [`ItemRef::Id`] and an object to
/// [`ItemRef::Item`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemRef {
    /// Reference by id only.
    Id(String),
    /// Embedded item record.
    Item(Item),
}

impl ItemRef {
    /// The referenced item id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Item(item) => &item.id,
        }
    }

    /// The display name, falling back to the id.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Item(Item {
                name: Some(name), ..
            }) => name,
            _ => self.id(),
        }
    }

    /// The item's cost per unit, if the reference carries one.
    #[must_use]
    pub const fn unit_cost(&self) -> Option<Decimal> {
        match self {
            Self::Id(_) => None,
            Self::Item(item) => item.unit_cost,
        }
    }
}

impl From<&str> for ItemRef {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for ItemRef {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<Item> for ItemRef {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_item_ref_accessors() {
        let by_id = ItemRef::from("flour");
        assert_eq!(by_id.id(), "flour");
        assert_eq!(by_id.name(), "flour");
        assert_eq!(by_id.unit_cost(), None);

        let embedded = ItemRef::from(
            Item::new("flour")
                .with_name("Bread flour")
                .with_unit_cost(dec!(0.02)),
        );
        assert_eq!(embedded.id(), "flour");
        assert_eq!(embedded.name(), "Bread flour");
        assert_eq!(embedded.unit_cost(), Some(dec!(0.02)));
    }

    #[test]
    fn test_item_ref_json_forms() {
        let by_id: ItemRef = serde_json::from_str(r#""water""#).unwrap();
        assert_eq!(by_id, ItemRef::Id("water".to_string()));

        let embedded: ItemRef =
            serde_json::from_str(r#"{"id": "water", "unitCost": "0.001"}"#).unwrap();
        assert_eq!(embedded.unit_cost(), Some(dec!(0.001)));
    }
}
