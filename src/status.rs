//! Status screen for a character
//!
//! Builds a read-only snapshot of a character and renders it as the
//! console status listing.

use std::fmt;
use std::io::{self, Write};
use crate::character::Character;
use crate::item::Item;

/// Snapshot of what the status screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub name: String,
    pub job: String,
    pub level: u32,
    pub health: i32,
    pub gold: i32,
    pub total_attack_power: i32,
    pub total_defense_power: i32,
    /// Equipped weapons, then equipped armor
    pub equipped_items: Vec<Item>,
}

impl StatusReport {
    pub fn from_character(character: &Character) -> Self {
        StatusReport {
            name: character.name().to_string(),
            job: character.job().to_string(),
            level: character.level(),
            health: character.health(),
            gold: character.gold(),
            total_attack_power: character.calculate_total_attack_power(),
            total_defense_power: character.calculate_total_defense_power(),
            equipped_items: character
                .weapon_equipment()
                .get_equipped_items()
                .iter()
                .chain(character.armor_equipment().get_equipped_items())
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Status")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Job: {}", self.job)?;
        writeln!(f, "Level: {}", self.level)?;
        writeln!(f, "Health: {}", self.health)?;
        writeln!(f, "Gold: {}", self.gold)?;
        writeln!(f, "Attack: {}", self.total_attack_power)?;
        writeln!(f, "Defense: {}", self.total_defense_power)?;

        if self.equipped_items.is_empty() {
            return writeln!(f, "No items equipped.");
        }

        writeln!(f, "[Equipped Items]")?;
        for item in &self.equipped_items {
            writeln!(f, "- {}", item)?;
        }

        Ok(())
    }
}

/// Writes a character's status listing to `out`
pub fn write_status(character: &Character, mut out: impl Write) -> io::Result<()> {
    write!(out, "{}", StatusReport::from_character(character))
}

/// Prints a character's status listing to standard output
pub fn show_status(character: &Character) -> io::Result<()> {
    write_status(character, io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemType;

    fn render(character: &Character) -> String {
        let mut out = Vec::new();
        write_status(character, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_status_without_equipment() {
        let character = Character::new("Chad", "Warrior");

        let expected = "Status\n\
                        Name: Chad\n\
                        Job: Warrior\n\
                        Level: 1\n\
                        Health: 100\n\
                        Gold: 1500\n\
                        Attack: 10\n\
                        Defense: 5\n\
                        No items equipped.\n";
        assert_eq!(render(&character), expected);
    }

    #[test]
    fn test_status_lists_both_equipment_managers() {
        let sword = Item::new("Old Sword", ItemType::Weapon, 2);
        let armor = Item::new("Iron Armor", ItemType::Armor, 9);

        let mut character = Character::new("Chad", "Warrior");
        character.add_item(armor.clone()).unwrap();
        character.add_item(sword.clone()).unwrap();
        character.equip(&armor).unwrap();
        character.equip(&sword).unwrap();

        let output = render(&character);
        assert!(output.contains("Attack: 12\n"));
        assert!(output.contains("Defense: 14\n"));
        assert!(output.ends_with(
            "[Equipped Items]\n\
             - Old Sword (weapon) : +2\n\
             - Iron Armor (armor) : +9\n"
        ));
    }

    #[test]
    fn test_report_snapshot() {
        let mut character = Character::new("Mia", "Mage");
        character.take_damage(25);
        character.spend_gold(100).unwrap();

        let report = StatusReport::from_character(&character);
        assert_eq!(report.health, 75);
        assert_eq!(report.gold, 1400);
        assert!(report.equipped_items.is_empty());
    }
}
