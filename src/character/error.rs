use thiserror::Error;
use crate::item::ItemType;

/// Errors that can occur during character inventory and equipment operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharacterError {
    /// Item type has no category inventory
    #[error("Invalid item type: {0}")]
    InvalidItemType(ItemType),

    /// Item type can't be equipped (only weapons and armor can)
    #[error("Item type {0} can't be equipped")]
    NotEquippable(ItemType),

    /// Every owned copy of the item is already equipped, or none is owned
    #[error("No unequipped '{0}' in inventory")]
    NotOwned(String),

    /// Tried to spend more gold than the character has
    #[error("Insufficient gold (requested: {requested}, available: {available})")]
    InsufficientGold {
        requested: i32,
        available: i32,
    },
}
