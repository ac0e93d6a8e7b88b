//! Character and inventory model for a console role-playing game.
//!
//! - `item`: item values, type routing and the item catalog
//! - `inventory`: ordered inventories and equipment managers
//! - `character`: the player character and its derived combat stats
//! - `status`: the console status listing
//! - `config` / `game`: startup configuration and the starter outfit

pub mod character;
pub mod config;
pub mod game;
pub mod inventory;
pub mod item;
pub mod stats;
pub mod status;

pub use character::{Character, CharacterError};
pub use item::{Item, ItemCatalog, ItemType};
