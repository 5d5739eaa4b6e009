use crate::error::Error;
use crate::models::item::Item;
use crate::repositories::ItemsRepository;
use uuid::Uuid;

/// Keeps items in a `Vec` in insertion order. Every operation is a linear scan.
#[derive(Debug, Clone, Default)]
pub struct InMemItemsRepository {
    items: Vec<Item>,
}

impl InMemItemsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository holding the sample items.
    pub fn seeded() -> Self {
        InMemItemsRepository {
            items: vec![
                Item::new("Potion", 10.0),
                Item::new("Iron Sword", 20.0),
                Item::new("Bronze Shield", 15.0),
            ],
        }
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl ItemsRepository for InMemItemsRepository {
    fn get_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn get_item(&self, id: Uuid) -> Option<Item> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    fn create_item(&mut self, item: Item) -> crate::Result<()> {
        if self.position(item.id).is_some() {
            return Err(Error::DuplicateItem(item.id));
        }

        self.items.push(item);
        Ok(())
    }

    fn update_item(&mut self, item: Item) -> crate::Result<()> {
        let index = self.position(item.id).ok_or(Error::ItemNotFound(item.id))?;
        self.items[index] = item;
        Ok(())
    }

    fn delete_item(&mut self, id: Uuid) -> crate::Result<Item> {
        let index = self.position(id).ok_or(Error::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }
}
