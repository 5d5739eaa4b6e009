use crate::dtos::CreateItemDto;
use crate::events::ItemCreatedEvent;
use crate::mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use crate::models::item::Item;
use crate::repositories::SharedItemsRepository;

pub struct CreateItemCommand(pub CreateItemDto);
impl Request<Item> for CreateItemCommand {}

pub struct CreateItemRequestHandler(pub SharedItemsRepository, pub DefaultMediator);
impl RequestHandler<CreateItemCommand, Item> for CreateItemRequestHandler {
    fn handle(&mut self, command: CreateItemCommand) -> crate::Result<Item> {
        let CreateItemDto { name, price } = command.0;
        let item = Item::new(name, price);

        self.0.lock()?.create_item(item.clone())?;
        self.1.publish(ItemCreatedEvent(item.clone()))?;

        Ok(item)
    }
}
