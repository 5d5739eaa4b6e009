//! # catalog
//! A CRUD service over an in-memory catalog of items.
//!
//! Requests to `/api/items` are turned into commands and queries, dispatched through a
//! [`DefaultMediator`] to their handlers, which operate on a shared
//! [`ItemsRepository`](repositories::ItemsRepository).

use crate::commands::*;
use crate::events::*;
use crate::mediator::DefaultMediator;
use crate::queries::*;
use crate::repositories::SharedItemsRepository;
use std::sync::{Arc, Mutex};

pub mod commands;
pub mod config;
pub mod dtos;
pub mod endpoints;
pub mod error;
pub mod events;
pub mod mediator;
pub mod models;
pub mod queries;
pub mod repositories;

pub use error::Error;

/// A convenient result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type SharedMediator = Arc<Mutex<DefaultMediator>>;

/// Registers every item command and query handler against `repository`, and logs
/// item events as they are published.
pub fn create_mediator_service(repository: &SharedItemsRepository) -> SharedMediator {
    let mediator = DefaultMediator::builder()
        // Requests
        .add_handler(GetItemsRequestHandler(repository.clone()))
        .add_handler(GetItemRequestHandler(repository.clone()))
        .add_handler_deferred(|m| CreateItemRequestHandler(repository.clone(), m))
        .add_handler_deferred(|m| UpdateItemRequestHandler(repository.clone(), m))
        .add_handler_deferred(|m| DeleteItemRequestHandler(repository.clone(), m))
        // Events
        .subscribe_fn(|event: ItemCreatedEvent| {
            log::info!("Created: {} - {}", event.0.name, event.0.id);
        })
        .subscribe_fn(|event: ItemUpdatedEvent| {
            log::info!("Updated: {} - {}", event.0.name, event.0.id);
        })
        .subscribe_fn(|event: ItemDeletedEvent| {
            log::info!("Deleted: {} - {}", event.0.name, event.0.id);
        })
        .build();

    Arc::new(Mutex::new(mediator))
}
