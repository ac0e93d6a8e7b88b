//! Game setup
//!
//! Builds the starting character from the configuration: every catalog
//! item goes into the character's inventory and the strongest weapon and
//! armor get equipped.

use crate::character::{Character, CharacterError};
use crate::config::GameConfig;
use crate::item::{CatalogError, Item, ItemCatalog, ItemType};

/// What happened while handing out starter items
#[derive(Debug, Default)]
pub struct OutfitSummary {
    pub added: usize,
    /// Items the character refused, with the reason
    pub rejected: Vec<(Item, CharacterError)>,
    pub equipped: Vec<Item>,
}

/// Creates the configured character and outfits it from the configured catalog
pub fn new_game(config: &GameConfig) -> Result<(Character, OutfitSummary), CatalogError> {
    let catalog = config.load_catalog()?;

    let mut character = Character::new(config.player_name.as_str(), config.job.as_str());
    let summary = outfit(&mut character, &catalog);

    Ok((character, summary))
}

/// Gives the character one of every catalog item and equips the best gear
///
/// Rejected items are recorded and skipped; they don't stop the rest.
pub fn outfit(character: &mut Character, catalog: &ItemCatalog) -> OutfitSummary {
    let mut summary = OutfitSummary::default();

    for item in catalog.all_items() {
        match character.add_item(item.clone()) {
            Ok(()) => summary.added += 1,
            Err(e) => {
                log::warn!("Skipping '{}': {}", item.name(), e);
                summary.rejected.push((item.clone(), e));
            }
        }
    }

    for item_type in [ItemType::Weapon, ItemType::Armor] {
        let best = strongest(catalog, item_type).cloned();

        if let Some(item) = best {
            match character.equip(&item) {
                Ok(()) => summary.equipped.push(item),
                Err(e) => log::warn!("Couldn't equip '{}': {}", item.name(), e),
            }
        }
    }

    summary
}

/// Highest-bonus catalog item of a type, first one wins on ties
fn strongest(catalog: &ItemCatalog, item_type: ItemType) -> Option<&Item> {
    catalog
        .all_items()
        .iter()
        .filter(|item| item.item_type() == item_type)
        .fold(None, |best: Option<&Item>, item| match best {
            Some(current) if current.stat_bonus() >= item.stat_bonus() => Some(current),
            _ => Some(item),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outfit_with_default_catalog() {
        let catalog = ItemCatalog::create_default();
        let mut character = Character::new("Chad", "Warrior");

        let summary = outfit(&mut character, &catalog);

        // Everything but the shield fits a category
        assert_eq!(summary.added, 6);
        assert_eq!(summary.rejected.len(), 1);
        assert_eq!(summary.rejected[0].0.name(), "Spartan Shield");
        assert_eq!(summary.rejected[0].1, CharacterError::InvalidItemType(ItemType::Defense));

        let equipped: Vec<&str> = summary.equipped.iter().map(Item::name).collect();
        assert_eq!(equipped, vec!["Bronze Axe", "Iron Armor"]);

        assert_eq!(character.calculate_total_attack_power(), 15);
        assert_eq!(character.calculate_total_defense_power(), 14);
        assert_eq!(character.inventory().len(), 6);
        assert_eq!(character.consumable_inventory().len(), 2);
    }

    #[test]
    fn test_outfit_without_equipment() {
        let catalog = ItemCatalog::from_json_str(
            r#"[{ "name": "Health Potion", "type": "Potion", "stat_bonus": 30 }]"#,
        ).unwrap();
        let mut character = Character::new("Chad", "Warrior");

        let summary = outfit(&mut character, &catalog);
        assert_eq!(summary.added, 1);
        assert!(summary.equipped.is_empty());
        assert_eq!(character.calculate_total_attack_power(), 10);
    }

    #[test]
    fn test_strongest_prefers_first_on_tie() {
        let catalog = ItemCatalog::from_json_str(
            r#"[
                { "name": "Club", "type": "Weapon", "stat_bonus": 3 },
                { "name": "Mace", "type": "Weapon", "stat_bonus": 3 }
            ]"#,
        ).unwrap();

        assert_eq!(strongest(&catalog, ItemType::Weapon).map(Item::name), Some("Club"));
        assert!(strongest(&catalog, ItemType::Armor).is_none());
    }

    #[test]
    fn test_new_game_uses_config() {
        let config = GameConfig {
            player_name: "Mia".to_string(),
            job: "Mage".to_string(),
            catalog_path: None,
        };

        let (character, summary) = new_game(&config).unwrap();
        assert_eq!(character.name(), "Mia");
        assert_eq!(character.job(), "Mage");
        assert_eq!(summary.equipped.len(), 2);
    }

    #[test]
    fn test_new_game_reports_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig {
            player_name: "Mia".to_string(),
            job: "Mage".to_string(),
            catalog_path: Some(dir.path().join("missing.json")),
        };

        let result = new_game(&config);
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
