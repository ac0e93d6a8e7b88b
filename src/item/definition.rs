use serde::{Serialize, Deserialize};
use std::fmt;

/// Kinds of items a character can carry
///
/// `Defense` is a valid item type (shields and the like show up in the
/// catalog) but it has no category inventory, so characters reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Weapon,
    Armor,
    Potion,
    Scroll,
    Defense,
}

/// Category inventories a character keeps alongside its general inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
}

impl ItemType {
    /// Routes an item type to its category inventory
    ///
    /// Returns None for types that have no category (currently `Defense`).
    pub fn category(self) -> Option<ItemCategory> {
        match self {
            ItemType::Weapon => Some(ItemCategory::Weapon),
            ItemType::Armor => Some(ItemCategory::Armor),
            ItemType::Potion | ItemType::Scroll => Some(ItemCategory::Consumable),
            ItemType::Defense => None,
        }
    }

    /// Label used when listing equipped items
    pub fn label(self) -> &'static str {
        match self {
            ItemType::Weapon => "weapon",
            ItemType::Armor | ItemType::Defense => "armor",
            _ => "other",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ItemType::Weapon => "Weapon",
            ItemType::Armor => "Armor",
            ItemType::Potion => "Potion",
            ItemType::Scroll => "Scroll",
            ItemType::Defense => "Defense",
        };
        write!(f, "{}", name)
    }
}

/// A single item owned by a character
///
/// Items are plain values: two items with the same name, type and bonus
/// are interchangeable, which is what inventory removal relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,

    #[serde(rename = "type")]
    item_type: ItemType,

    /// Added to attack (weapons) or defense (armor) while equipped
    stat_bonus: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, item_type: ItemType, stat_bonus: i32) -> Self {
        Item {
            name: name.into(),
            item_type,
            stat_bonus,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn stat_bonus(&self) -> i32 {
        self.stat_bonus
    }

    /// Shorthand for `item_type().category()`
    pub fn category(&self) -> Option<ItemCategory> {
        self.item_type.category()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}) : +{}", self.name, self.item_type.label(), self.stat_bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ItemType::Weapon, Some(ItemCategory::Weapon))]
    #[case(ItemType::Armor, Some(ItemCategory::Armor))]
    #[case(ItemType::Potion, Some(ItemCategory::Consumable))]
    #[case(ItemType::Scroll, Some(ItemCategory::Consumable))]
    #[case(ItemType::Defense, None)]
    fn test_type_routes_to_category(#[case] item_type: ItemType, #[case] expected: Option<ItemCategory>) {
        assert_eq!(item_type.category(), expected);
    }

    #[rstest]
    #[case(ItemType::Weapon, "weapon")]
    #[case(ItemType::Armor, "armor")]
    #[case(ItemType::Defense, "armor")]
    #[case(ItemType::Potion, "other")]
    #[case(ItemType::Scroll, "other")]
    fn test_type_labels(#[case] item_type: ItemType, #[case] label: &str) {
        assert_eq!(item_type.label(), label);
    }

    #[test]
    fn test_item_value_equality() {
        let a = Item::new("Old Sword", ItemType::Weapon, 2);
        let b = Item::new("Old Sword", ItemType::Weapon, 2);
        let c = Item::new("Old Sword", ItemType::Weapon, 3);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_item_json_shape() {
        let item: Item = serde_json::from_str(
            r#"{ "name": "Health Potion", "type": "Potion", "stat_bonus": 30 }"#,
        ).unwrap();

        assert_eq!(item.name(), "Health Potion");
        assert_eq!(item.item_type(), ItemType::Potion);
        assert_eq!(item.stat_bonus(), 30);
    }
}
