use crate::events::ItemDeletedEvent;
use crate::mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use crate::models::item::Item;
use crate::repositories::SharedItemsRepository;
use uuid::Uuid;

pub struct DeleteItemCommand(pub Uuid);

/// Resolves to the removed item, or `None` when no item has the given id.
impl Request<Option<Item>> for DeleteItemCommand {}

pub struct DeleteItemRequestHandler(pub SharedItemsRepository, pub DefaultMediator);
impl RequestHandler<DeleteItemCommand, Option<Item>> for DeleteItemRequestHandler {
    fn handle(&mut self, command: DeleteItemCommand) -> crate::Result<Option<Item>> {
        let mut repository = self.0.lock()?;

        if repository.get_item(command.0).is_none() {
            return Ok(None);
        }

        let deleted = repository.delete_item(command.0)?;
        drop(repository);

        self.1.publish(ItemDeletedEvent(deleted.clone()))?;

        Ok(Some(deleted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{self, InMemItemsRepository};
    use std::sync::{Arc, Mutex};

    type Published = Arc<Mutex<Vec<Item>>>;

    fn mediator_for(repository: &SharedItemsRepository) -> (DefaultMediator, Published) {
        let published = Published::default();
        let sink = published.clone();

        let mediator = DefaultMediator::builder()
            .add_handler_deferred(|m| DeleteItemRequestHandler(repository.clone(), m))
            .subscribe_fn(move |event: ItemDeletedEvent| {
                sink.lock().unwrap().push(event.0);
            })
            .build();

        (mediator, published)
    }

    #[test]
    fn delete_removes_item_and_publishes_event() {
        let repository = repositories::shared(InMemItemsRepository::seeded());
        let potion = repository.lock().unwrap().get_items()[0].clone();
        let (mut mediator, published) = mediator_for(&repository);

        let deleted = mediator.send(DeleteItemCommand(potion.id)).unwrap();

        assert_eq!(Some(potion.clone()), deleted);
        assert_eq!(None, repository.lock().unwrap().get_item(potion.id));
        assert_eq!(2, repository.lock().unwrap().get_items().len());
        assert_eq!(vec![potion], *published.lock().unwrap());
    }

    #[test]
    fn delete_unknown_item_returns_none() {
        let repository = repositories::shared(InMemItemsRepository::seeded());
        let before = repository.lock().unwrap().get_items();
        let (mut mediator, published) = mediator_for(&repository);

        let deleted = mediator.send(DeleteItemCommand(Uuid::new_v4())).unwrap();

        assert!(deleted.is_none());
        assert_eq!(before, repository.lock().unwrap().get_items());
        assert!(published.lock().unwrap().is_empty());
    }

    #[test]
    fn delete_twice_returns_none_the_second_time() {
        let repository = repositories::shared(InMemItemsRepository::seeded());
        let potion = repository.lock().unwrap().get_items()[0].clone();
        let (mut mediator, published) = mediator_for(&repository);

        assert!(mediator.send(DeleteItemCommand(potion.id)).unwrap().is_some());
        assert!(mediator.send(DeleteItemCommand(potion.id)).unwrap().is_none());

        assert_eq!(2, repository.lock().unwrap().get_items().len());
        assert_eq!(1, published.lock().unwrap().len());
    }
}
