// Character module
//
// The player character: base stats, item routing into category
// inventories, equipment and the derived combat totals.

pub mod error;
pub mod player;

pub use error::CharacterError;
pub use player::Character;
