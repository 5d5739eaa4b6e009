mod get_item;
mod get_items;

pub use get_item::*;
pub use get_items::*;
