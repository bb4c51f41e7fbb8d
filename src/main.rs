use std::env;
use std::path::PathBuf;

use card_index::models::config::ServerConfig;
use card_index::run;

const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_path = env::var("CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    let server_config = match ServerConfig::load(&config_path) {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load {}: {e}", config_path.display());
            std::process::exit(1);
        }
    };

    run(server_config).await
}
