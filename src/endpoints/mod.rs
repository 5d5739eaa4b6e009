use actix_web::web;

pub mod items;

/// Mounts the item routes under `/api/items`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/items")
            .service(items::create)
            .service(items::update)
            .service(items::delete)
            .service(items::get)
            .service(items::get_all),
    );
}
