use actix_web::middleware::{self, TrailingSlash};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use catalog::config::Config;
use catalog::endpoints;
use catalog::repositories::{self, InMemItemsRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()?;

    let repository = if config.seed_items {
        repositories::shared(InMemItemsRepository::seeded())
    } else {
        repositories::shared(InMemItemsRepository::new())
    };

    let mediator = catalog::create_mediator_service(&repository);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::new(TrailingSlash::Trim))
            .wrap(middleware::Logger::default())
            .app_data(Data::new(mediator.clone()))
            .configure(endpoints::configure)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .run();

    tokio::join!(server, on_server_start(&config))
        .0
        .context("Server terminated with an error")
}

async fn on_server_start(config: &Config) {
    log::info!(
        "Catalog server started on {}:{} (seeded: {})",
        config.host,
        config.port,
        config.seed_items
    );
}
