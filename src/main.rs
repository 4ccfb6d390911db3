use std::net::SocketAddr;
use std::sync::Arc;

use recruiting_portal::{
    config::{get_config, init_config, LogFormat},
    database::{
        pool::{create_pool, run_migrations},
        MemoryStore, PgStore, PortalStore,
    },
    middleware::cors::cors_layer,
    routes, AppState, Settings,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    init_tracing(config.log_format);

    let store: Arc<dyn PortalStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            run_migrations(&pool).await?;
            info!("Connected to PostgreSQL; migrations applied");
            Arc::new(PgStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL is not set; using the in-memory store, data will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    let app_state = AppState::new(store, Settings::from(config));
    let app = routes::build_router(app_state).layer(cors_layer(&config.cors_allowed_origins));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
