use crate::character::CharacterError;
use crate::item::{Item, ItemCategory};

/// Equipped items for one equip category (weapons or armor)
///
/// Any number of items of the category may be equipped at once; their
/// bonuses stack. The manager doesn't check ownership, `Character::equip`
/// does that against the matching category inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentManager {
    category: ItemCategory,
    equipped_items: Vec<Item>,
}

impl EquipmentManager {
    /// Creates an empty manager for `category`
    pub fn new(category: ItemCategory) -> Self {
        EquipmentManager {
            category,
            equipped_items: Vec::new(),
        }
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Equips an item of this manager's category
    pub fn equip(&mut self, item: Item) -> Result<(), CharacterError> {
        if item.category() != Some(self.category) {
            return Err(CharacterError::NotEquippable(item.item_type()));
        }

        log::debug!("Equipped {}", item);
        self.equipped_items.push(item);
        Ok(())
    }

    /// Unequips one copy of an item
    ///
    /// Returns false if the item wasn't equipped.
    pub fn unequip(&mut self, item: &Item) -> bool {
        match self.equipped_items.iter().position(|equipped| equipped == item) {
            Some(index) => {
                self.equipped_items.remove(index);
                log::debug!("Unequipped {}", item);
                true
            }
            None => false,
        }
    }

    /// Equipped items in the order they were equipped
    pub fn equipped_items(&self) -> &[Item] {
        &self.equipped_items
    }

    /// Equipped items as listed on the status screen
    pub fn get_equipped_items(&self) -> &[Item] {
        self.equipped_items()
    }

    pub fn count_equipped(&self, item: &Item) -> usize {
        self.equipped_items.iter().filter(|equipped| *equipped == item).count()
    }

    pub fn is_equipped(&self, item: &Item) -> bool {
        self.equipped_items.contains(item)
    }

    /// Sum of stat bonuses across equipped items, saturating at the i32 range
    pub fn total_stat_bonus(&self) -> i32 {
        self.equipped_items
            .iter()
            .map(Item::stat_bonus)
            .fold(0, i32::saturating_add)
    }

    /// Attack contributed by this manager's equipped items
    pub fn calculate_total_attack_power(&self) -> i32 {
        self.total_stat_bonus()
    }

    /// Defense contributed by this manager's equipped items
    pub fn calculate_total_defense_power(&self) -> i32 {
        self.total_stat_bonus()
    }
}
