use crate::inventory::{EquipmentManager, InventoryManager};
use crate::item::{Item, ItemCategory, ItemType};
use crate::stats::{Health, MAX_HEALTH};
use super::error::CharacterError;

const STARTING_LEVEL: u32 = 1;
const STARTING_ATTACK_POWER: i32 = 10;
const STARTING_DEFENSE_POWER: i32 = 5;
const STARTING_GOLD: i32 = 1500;

/// The player character
///
/// Owns a general inventory plus three category inventories mirroring it
/// (weapons, armor, consumables), and one equipment manager each for
/// weapons and armor. Attack and defense totals are the base values plus
/// whatever is equipped.
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    job: String,
    level: u32,
    attack_power: i32,
    defense_power: i32,
    health: Health,
    gold: i32,
    dungeon_clear_count: u32,

    inventory: InventoryManager,
    weapon_inventory: InventoryManager,
    armor_inventory: InventoryManager,
    consumable_inventory: InventoryManager,

    weapon_equipment: EquipmentManager,
    armor_equipment: EquipmentManager,
}

impl Character {
    /// Creates a level 1 character with starting stats and empty inventories
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Character {
            name: name.into(),
            job: job.into(),
            level: STARTING_LEVEL,
            attack_power: STARTING_ATTACK_POWER,
            defense_power: STARTING_DEFENSE_POWER,
            health: Health::new(MAX_HEALTH),
            gold: STARTING_GOLD,
            dungeon_clear_count: 0,
            inventory: InventoryManager::new(),
            weapon_inventory: InventoryManager::new(),
            armor_inventory: InventoryManager::new(),
            consumable_inventory: InventoryManager::new(),
            weapon_equipment: EquipmentManager::new(ItemCategory::Weapon),
            armor_equipment: EquipmentManager::new(ItemCategory::Armor),
        }
    }

    // ======================================================================
    // Inventory
    // ======================================================================

    /// Adds an item to the general inventory and its category inventory
    ///
    /// Fails with `InvalidItemType` for types without a category; nothing
    /// is added in that case.
    pub fn add_item(&mut self, item: Item) -> Result<(), CharacterError> {
        let category = Self::route(&item)?;

        self.category_inventory_mut(category).add_item(item.clone());
        self.inventory.add_item(item);
        Ok(())
    }

    /// Removes one copy of an item from the general and category inventories
    ///
    /// Returns `Ok(false)` if the item isn't held. If the removed copy was
    /// the last unequipped one, an equipped copy goes with it.
    pub fn remove_item(&mut self, item: &Item) -> Result<bool, CharacterError> {
        let category = Self::route(item)?;

        if !self.inventory.remove_item(item) {
            return Ok(false);
        }
        self.category_inventory_mut(category).remove_item(item);

        let owned = self.category_inventory(category).count_item(item);
        if let Some(equipment) = self.equipment_mut(item.item_type()) {
            if equipment.count_equipped(item) > owned {
                equipment.unequip(item);
                log::debug!("Unequipped {} (no longer owned)", item.name());
            }
        }

        Ok(true)
    }

    fn route(item: &Item) -> Result<ItemCategory, CharacterError> {
        item.category().ok_or_else(|| {
            log::warn!("Rejected item '{}' of type {}", item.name(), item.item_type());
            CharacterError::InvalidItemType(item.item_type())
        })
    }

    pub fn inventory(&self) -> &InventoryManager {
        &self.inventory
    }

    pub fn weapon_inventory(&self) -> &InventoryManager {
        &self.weapon_inventory
    }

    pub fn armor_inventory(&self) -> &InventoryManager {
        &self.armor_inventory
    }

    pub fn consumable_inventory(&self) -> &InventoryManager {
        &self.consumable_inventory
    }

    /// Gets the category inventory for `category`
    pub fn category_inventory(&self, category: ItemCategory) -> &InventoryManager {
        match category {
            ItemCategory::Weapon => &self.weapon_inventory,
            ItemCategory::Armor => &self.armor_inventory,
            ItemCategory::Consumable => &self.consumable_inventory,
        }
    }

    fn category_inventory_mut(&mut self, category: ItemCategory) -> &mut InventoryManager {
        match category {
            ItemCategory::Weapon => &mut self.weapon_inventory,
            ItemCategory::Armor => &mut self.armor_inventory,
            ItemCategory::Consumable => &mut self.consumable_inventory,
        }
    }

    // ======================================================================
    // Equipment
    // ======================================================================

    /// Equips an owned weapon or armor
    ///
    /// The character must own more copies of the item than are already
    /// equipped.
    pub fn equip(&mut self, item: &Item) -> Result<(), CharacterError> {
        let owned = match item.category() {
            Some(category) => self.category_inventory(category).count_item(item),
            None => 0,
        };
        let equipment = self
            .equipment_mut(item.item_type())
            .ok_or(CharacterError::NotEquippable(item.item_type()))?;

        if equipment.count_equipped(item) >= owned {
            return Err(CharacterError::NotOwned(item.name().to_string()));
        }

        equipment.equip(item.clone())
    }

    /// Unequips one copy of an item
    ///
    /// Returns `Ok(false)` if the item wasn't equipped.
    pub fn unequip(&mut self, item: &Item) -> Result<bool, CharacterError> {
        match self.equipment_mut(item.item_type()) {
            Some(equipment) => Ok(equipment.unequip(item)),
            None => Err(CharacterError::NotEquippable(item.item_type())),
        }
    }

    fn equipment_mut(&mut self, item_type: ItemType) -> Option<&mut EquipmentManager> {
        match item_type {
            ItemType::Weapon => Some(&mut self.weapon_equipment),
            ItemType::Armor => Some(&mut self.armor_equipment),
            _ => None,
        }
    }

    pub fn weapon_equipment(&self) -> &EquipmentManager {
        &self.weapon_equipment
    }

    pub fn armor_equipment(&self) -> &EquipmentManager {
        &self.armor_equipment
    }

    /// Equipped weapons followed by equipped armor
    pub fn equipped_items(&self) -> impl Iterator<Item = &Item> {
        self.weapon_equipment
            .equipped_items()
            .iter()
            .chain(self.armor_equipment.equipped_items())
    }

    // ======================================================================
    // Derived stats
    // ======================================================================

    /// Base attack plus the bonuses of equipped weapons, saturating at the i32 range
    pub fn calculate_total_attack_power(&self) -> i32 {
        self.attack_power
            .saturating_add(self.weapon_equipment.calculate_total_attack_power())
    }

    /// Base defense plus the bonuses of equipped armor, saturating at the i32 range
    pub fn calculate_total_defense_power(&self) -> i32 {
        self.defense_power
            .saturating_add(self.armor_equipment.calculate_total_defense_power())
    }

    pub fn has_required_defense(&self, required_defense: i32) -> bool {
        self.calculate_total_defense_power() >= required_defense
    }

    // ======================================================================
    // Health, gold and progress
    // ======================================================================

    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health.take_damage(amount)
    }

    pub fn heal(&mut self, amount: i32) -> i32 {
        self.health.heal(amount)
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    pub fn earn_gold(&mut self, amount: i32) {
        self.gold = self.gold.saturating_add(amount.max(0));
    }

    /// Spends gold, leaving it unchanged if there isn't enough
    pub fn spend_gold(&mut self, amount: i32) -> Result<(), CharacterError> {
        if amount > self.gold {
            return Err(CharacterError::InsufficientGold {
                requested: amount,
                available: self.gold,
            });
        }

        self.gold -= amount.max(0);
        Ok(())
    }

    pub fn record_dungeon_clear(&mut self) {
        self.dungeon_clear_count += 1;
    }

    pub fn reset_dungeon_clear_count(&mut self) {
        self.dungeon_clear_count = 0;
    }

    // ======================================================================
    // Accessors
    // ======================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn job(&self) -> &str {
        &self.job
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Base attack power, before equipment
    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    /// Base defense power, before equipment
    pub fn defense_power(&self) -> i32 {
        self.defense_power
    }

    pub fn health(&self) -> i32 {
        self.health.current()
    }

    pub fn max_health(&self) -> i32 {
        self.health.max()
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn dungeon_clear_count(&self) -> u32 {
        self.dungeon_clear_count
    }
}
