use crate::mediator::{Request, RequestHandler};
use crate::models::item::Item;
use crate::repositories::SharedItemsRepository;
use uuid::Uuid;

pub struct GetItemQuery(pub Uuid);
impl Request<Option<Item>> for GetItemQuery {}

pub struct GetItemRequestHandler(pub SharedItemsRepository);
impl RequestHandler<GetItemQuery, Option<Item>> for GetItemRequestHandler {
    fn handle(&mut self, query: GetItemQuery) -> crate::Result<Option<Item>> {
        Ok(self.0.lock()?.get_item(query.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::repositories::{self, ItemsRepository};

    // Answers every lookup with the same item, whatever the id.
    struct StubItemsRepository(Option<Item>);

    impl ItemsRepository for StubItemsRepository {
        fn get_items(&self) -> Vec<Item> {
            self.0.iter().cloned().collect()
        }

        fn get_item(&self, _: Uuid) -> Option<Item> {
            self.0.clone()
        }

        fn create_item(&mut self, item: Item) -> crate::Result<()> {
            Err(Error::DuplicateItem(item.id))
        }

        fn update_item(&mut self, item: Item) -> crate::Result<()> {
            Err(Error::ItemNotFound(item.id))
        }

        fn delete_item(&mut self, id: Uuid) -> crate::Result<Item> {
            Err(Error::ItemNotFound(id))
        }
    }

    #[test]
    fn get_item_with_unexisting_item_returns_none() {
        let repository = repositories::shared(StubItemsRepository(None));
        let mut handler = GetItemRequestHandler(repository);

        let result = handler.handle(GetItemQuery(Uuid::new_v4())).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn get_item_with_existing_item_returns_expected_item() {
        let expected = Item::new(Uuid::new_v4().to_string(), 512.0);
        let repository = repositories::shared(StubItemsRepository(Some(expected.clone())));
        let mut handler = GetItemRequestHandler(repository);

        let result = handler.handle(GetItemQuery(Uuid::new_v4())).unwrap();

        assert_eq!(Some(expected.as_dto()), result.map(|item| item.as_dto()));
    }
}
