use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use configs::AppConfig;
use service::{admin::store::AdminStore, file::admin_store::FileAdminStore, user_client::HttpUserClient};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils. `LOG_FORMAT=json` selects
/// the structured writer for container deployments.
fn init_logging() {
    match env::var("LOG_FORMAT").as_deref() {
        Ok("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load configuration from config.toml, falling back to env vars when no
/// config file is present.
fn load_config() -> Result<AppConfig, StartupError> {
    let mut cfg = match configs::load_default() {
        Ok(cfg) => cfg,
        Err(_) => {
            let mut cfg = AppConfig::default();
            if let Ok(host) = env::var("SERVER_HOST") {
                cfg.server.host = host;
            }
            if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok())
            {
                cfg.server.port = port;
            }
            cfg
        }
    };
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config()?;

    // Local Admin persistence
    let admin_store: Arc<dyn AdminStore> = FileAdminStore::new("data/admins.json").await?;

    // Outbound client for the remote user-service, owned by the state
    let user_client = HttpUserClient::new(
        &cfg.user_service.base_url,
        Duration::from_secs(cfg.user_service.request_timeout_secs),
    )?;
    info!(base_url = %cfg.user_service.base_url, "user service client ready");

    let state = ServerState { admin_store, user_client: Arc::new(user_client) };

    // Build router
    let app: Router = routes::build_router(build_cors(), state);

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting admin-service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
