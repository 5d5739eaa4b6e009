use crate::models::item::Item;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

mod in_mem_items_repository;
pub use in_mem_items_repository::InMemItemsRepository;

/// Handle to the store shared by every request handler.
pub type SharedItemsRepository = Arc<Mutex<dyn ItemsRepository + Send>>;

/// Storage for catalog items.
pub trait ItemsRepository {
    /// Returns every stored item.
    fn get_items(&self) -> Vec<Item>;

    /// Returns the item with the given id, if any.
    fn get_item(&self, id: Uuid) -> Option<Item>;

    /// Inserts a fully populated item. Fails if its id is already taken.
    fn create_item(&mut self, item: Item) -> crate::Result<()>;

    /// Replaces the stored item that has the same id.
    fn update_item(&mut self, item: Item) -> crate::Result<()>;

    /// Removes and returns the item with the given id.
    fn delete_item(&mut self, id: Uuid) -> crate::Result<Item>;
}

/// Wraps a repository into the handle shared by the handlers.
pub fn shared<R>(repository: R) -> SharedItemsRepository
where
    R: ItemsRepository + Send + 'static,
{
    Arc::new(Mutex::new(repository))
}
