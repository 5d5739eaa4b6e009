use crate::commands::{CreateItemCommand, DeleteItemCommand, UpdateItemCommand};
use crate::dtos::{CreateItemDto, ItemDto, UpdateItemDto};
use crate::error::Error;
use crate::mediator::Mediator;
use crate::queries::{GetItemQuery, GetItemsQuery};
use crate::SharedMediator;
use actix_web::http::header;
use actix_web::web::{Data, Json};
use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

#[post("")]
pub async fn create(
    mediator: Data<SharedMediator>,
    body: Json<CreateItemDto>,
) -> crate::Result<HttpResponse> {
    let mut mediator = mediator.lock()?;
    let item = mediator.send(CreateItemCommand(body.into_inner()))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/items/{}", item.id)))
        .json(item.as_dto()))
}

#[put("/{id}")]
pub async fn update(
    path: web::Path<Uuid>,
    mediator: Data<SharedMediator>,
    body: Json<UpdateItemDto>,
) -> crate::Result<HttpResponse> {
    let id = path.into_inner();
    let mut mediator = mediator.lock()?;
    let command = UpdateItemCommand {
        id,
        item: body.into_inner(),
    };

    match mediator.send(command)? {
        Some(_) => Ok(HttpResponse::NoContent().finish()),
        None => Err(Error::ItemNotFound(id)),
    }
}

#[delete("/{id}")]
pub async fn delete(
    path: web::Path<Uuid>,
    mediator: Data<SharedMediator>,
) -> crate::Result<HttpResponse> {
    let id = path.into_inner();
    let mut mediator = mediator.lock()?;

    match mediator.send(DeleteItemCommand(id))? {
        Some(_) => Ok(HttpResponse::NoContent().finish()),
        None => Err(Error::ItemNotFound(id)),
    }
}

#[get("/{id}")]
pub async fn get(
    path: web::Path<Uuid>,
    mediator: Data<SharedMediator>,
) -> crate::Result<HttpResponse> {
    let id = path.into_inner();
    let mut mediator = mediator.lock()?;

    match mediator.send(GetItemQuery(id))? {
        Some(item) => Ok(HttpResponse::Ok().json(item.as_dto())),
        None => Err(Error::ItemNotFound(id)),
    }
}

#[get("")]
pub async fn get_all(mediator: Data<SharedMediator>) -> crate::Result<HttpResponse> {
    let mut mediator = mediator.lock()?;
    let items: Vec<ItemDto> = mediator
        .send(GetItemsQuery)?
        .into_iter()
        .map(ItemDto::from)
        .collect();

    Ok(HttpResponse::Ok().json(items))
}
