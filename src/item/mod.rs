// Item system module
//
// This module provides the item model for the game, including:
// - Item values and their types
// - Routing of item types to category inventories
// - The item catalog the game hands starting items out from

pub mod definition;
pub mod registry;

// Re-export main types for convenient access
pub use definition::{Item, ItemCategory, ItemType};
pub use registry::{CatalogError, ItemCatalog};
