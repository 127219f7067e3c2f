use smugmug_photos_api::app::create_app;
use smugmug_photos_api::config::{load_config, save_default_config, Config};
use smugmug_photos_api::constants::CONFIG_PATH;
use smugmug_photos_api::error::AppResult;
use smugmug_photos_api::logging::{init_logging, install_panic_hook};
use smugmug_photos_api::service::AlbumService;
use smugmug_photos_api::smugmug::{SmugMugClient, UpstreamApi};
use std::sync::Arc;
use tracing::{error, info};

fn load_runtime_config() -> Config {
    dotenvy::dotenv().ok();

    let mut config = load_config(&CONFIG_PATH);
    config.apply_env_overrides(|key| std::env::var(key).ok());
    config
}

async fn build_client(config: &Config) -> AppResult<SmugMugClient> {
    let smugmug = config.smugmug.clone();
    // The blocking client owns its own runtime and must be built off the executor.
    tokio::task::spawn_blocking(move || SmugMugClient::new(&smugmug)).await?
}

#[tokio::main]
async fn main() {
    if std::env::args().any(|arg| arg == "--init-config") {
        match save_default_config(&CONFIG_PATH) {
            Ok(_) => {
                println!("Default configuration saved to {:?}", *CONFIG_PATH);
                std::process::exit(0);
            }
            Err(e) => {
                eprintln!("Failed to save default configuration: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Initialize logging
    init_logging();
    install_panic_hook();

    let config = load_runtime_config();

    if config.server.reload {
        info!("Reload flag is set but has no effect on a compiled binary");
    }

    let client = match build_client(&config).await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize SmugMug client: {}", e);
            std::process::exit(1);
        }
    };

    let api: Arc<dyn UpstreamApi> = Arc::new(client);
    let albums = Arc::new(AlbumService::new(api, config.smugmug.clone()));

    let app = create_app(albums);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting SmugMug photo service on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
