use crate::dtos::UpdateItemDto;
use crate::events::ItemUpdatedEvent;
use crate::mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use crate::models::item::Item;
use crate::repositories::SharedItemsRepository;
use uuid::Uuid;

pub struct UpdateItemCommand {
    pub id: Uuid,
    pub item: UpdateItemDto,
}

/// Resolves to `None` when no item has the given id.
impl Request<Option<Item>> for UpdateItemCommand {}

pub struct UpdateItemRequestHandler(pub SharedItemsRepository, pub DefaultMediator);
impl RequestHandler<UpdateItemCommand, Option<Item>> for UpdateItemRequestHandler {
    fn handle(&mut self, command: UpdateItemCommand) -> crate::Result<Option<Item>> {
        let mut repository = self.0.lock()?;

        let existing = match repository.get_item(command.id) {
            Some(item) => item,
            None => return Ok(None),
        };

        // Only name and price change; id and created date are kept.
        let updated = Item {
            name: command.item.name,
            price: command.item.price,
            ..existing
        };

        repository.update_item(updated.clone())?;
        drop(repository);

        self.1.publish(ItemUpdatedEvent(updated.clone()))?;

        Ok(Some(updated))
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
            .add_handler_deferred(|m| UpdateItemRequestHandler(repository.clone(), m))
            .subscribe_fn(move |event: ItemUpdatedEvent| {
                sink.lock().unwrap().push(event.0);
            })
            .build();

        (mediator, published)
    }

    #[test]
    fn update_keeps_id_and_created_date() {
        let repository = repositories::shared(InMemItemsRepository::seeded());
        let original = repository.lock().unwrap().get_items()[0].clone();
        let (mut mediator, published) = mediator_for(&repository);

        let updated = mediator
            .send(UpdateItemCommand {
                id: original.id,
                item: UpdateItemDto {
                    name: "Hi-Potion".to_owned(),
                    price: 25.0,
                },
            })
            .unwrap()
            .unwrap();

        assert_eq!(original.id, updated.id);
        assert_eq!(original.created_date, updated.created_date);
        assert_eq!("Hi-Potion", updated.name);
        assert_eq!(25.0, updated.price);
        assert_eq!(Some(updated.clone()), repository.lock().unwrap().get_item(original.id));
        assert_eq!(vec![updated], *published.lock().unwrap());
    }

    #[test]
    fn update_unknown_item_returns_none() {
        let repository = repositories::shared(InMemItemsRepository::seeded());
        let before = repository.lock().unwrap().get_items();
        let (mut mediator, published) = mediator_for(&repository);

        let result = mediator
            .send(UpdateItemCommand {
                id: Uuid::new_v4(),
                item: UpdateItemDto {
                    name: "Ghost".to_owned(),
                    price: 0.0,
                },
            })
            .unwrap();

        assert!(result.is_none());
        assert_eq!(before, repository.lock().unwrap().get_items());
        assert!(published.lock().unwrap().is_empty());
    }
}
