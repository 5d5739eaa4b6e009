use anyhow::Context;
use std::env;

/// Server settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Start the store with the sample items.
    pub seed_items: bool,
}

impl Config {
    /// Loads `.env` when present, then reads `HOST`, `PORT` and `SEED_ITEMS`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", port))?,
            Err(_) => 8080,
        };

        let seed_items = match env::var("SEED_ITEMS") {
            Ok(seed) => seed
                .parse::<bool>()
                .with_context(|| format!("Invalid SEED_ITEMS: {}", seed))?,
            Err(_) => true,
        };

        Ok(Config {
            host,
            port,
            seed_items,
        })
    }
}
