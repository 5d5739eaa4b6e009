use crate::mediator::{Request, RequestHandler};
use crate::models::item::Item;
use crate::repositories::SharedItemsRepository;

pub struct GetItemsQuery;
impl Request<Vec<Item>> for GetItemsQuery {}

pub struct GetItemsRequestHandler(pub SharedItemsRepository);
impl RequestHandler<GetItemsQuery, Vec<Item>> for GetItemsRequestHandler {
    fn handle(&mut self, _: GetItemsQuery) -> crate::Result<Vec<Item>> {
        Ok(self.0.lock()?.get_items())
    }
}
