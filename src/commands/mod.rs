mod create_item;
mod delete_item;
mod update_item;

pub use create_item::*;
pub use delete_item::*;
pub use update_item::*;
