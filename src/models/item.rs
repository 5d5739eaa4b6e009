use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A catalog record. The id and creation date are assigned once, on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_date: DateTime<Utc>,
}

impl Item {
    /// Creates an item with a fresh id, stamped with the current UTC time.
    pub fn new<S: Into<String>>(name: S, price: f64) -> Self {
        Item {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            created_date: Utc::now(),
        }
    }
}
