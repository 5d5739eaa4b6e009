use crate::mediator::Event;
use crate::models::item::Item;

#[derive(Debug, Clone)]
pub struct ItemCreatedEvent(pub Item);
impl Event for ItemCreatedEvent {}

#[derive(Debug, Clone)]
pub struct ItemUpdatedEvent(pub Item);
impl Event for ItemUpdatedEvent {}

#[derive(Debug, Clone)]
pub struct ItemDeletedEvent(pub Item);
impl Event for ItemDeletedEvent {}
