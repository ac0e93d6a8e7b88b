use crate::item::Item;

/// Ordered bag of owned items
///
/// This is the storage structure behind every character inventory, the
/// general one and each category view. Duplicates are allowed, insertion
/// order is preserved and there is no capacity limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryManager {
    items: Vec<Item>,
}

impl InventoryManager {
    /// Creates a new empty inventory
    pub fn new() -> Self {
        InventoryManager { items: Vec::new() }
    }

    /// Appends an item
    pub fn add_item(&mut self, item: Item) {
        log::debug!("Inventory add: {}", item.name());
        self.items.push(item);
    }

    /// Removes the first item equal to `item`
    ///
    /// Returns false (and changes nothing) if no such item is held.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        match self.items.iter().position(|held| held == item) {
            Some(index) => {
                self.items.remove(index);
                log::debug!("Inventory remove: {}", item.name());
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    /// Counts how many copies of an item are held
    pub fn count_item(&self, item: &Item) -> usize {
        self.items.iter().filter(|held| *held == item).count()
    }
}
