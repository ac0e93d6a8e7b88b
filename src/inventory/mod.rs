// Inventory system module
//
// This module provides the containers a character owns:
// - Ordered item inventories (general and per category)
// - Equipment managers tracking the equipped subset per category

pub mod equipment;
pub mod inventory;

// Re-export main types
pub use equipment::EquipmentManager;
pub use inventory::InventoryManager;
