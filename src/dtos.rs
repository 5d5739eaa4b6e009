use crate::models::item::Item;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The view of an [`Item`] returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_date: DateTime<Utc>,
}

/// Body of a create request. The id and creation date are assigned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemDto {
    pub name: String,
    pub price: f64,
}

/// Body of an update request. The id comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemDto {
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn as_dto(&self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            created_date: self.created_date,
        }
    }
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        ItemDto {
            id: item.id,
            name: item.name,
            price: item.price,
            created_date: item.created_date,
        }
    }
}
