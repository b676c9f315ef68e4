//! Lead intake API for the agency landing page

use lead_intake_api::api;
use lead_intake_api::build_provider;
use lead_intake_api::infrastructure::database::DatabaseConnection;
use lead_intake_api::settings::Settings;

use axum::http::{HeaderValue, Method};
use axum::http::header::CONTENT_TYPE;
use di::ServiceProvider;
use di_axum::RouterServiceProviderExtensions;
use log::{info, warn};
use tokio::runtime::{Builder, Runtime};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env()?;
    let runtime: Runtime = Builder::new_multi_thread().enable_all().build()?;

    runtime.block_on(web_server_task(settings))
}

async fn web_server_task(settings: Settings) -> anyhow::Result<()> {
    let bind_address = settings.bind_address.clone();
    let cors = cors_layer(&settings.cors_allowed_origins);
    let use_database = settings.database_url.is_some();

    let provider = build_provider(settings)?;
    if use_database {
        migrate(&provider).await?;
    }

    let app = api::router()
        .layer(ServiceBuilder::new().layer(cors))
        .with_provider(provider);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    info!("Shutting down...");

    Ok(())
}

async fn migrate(provider: &ServiceProvider) -> anyhow::Result<()> {
    let connection = provider.get_required::<DatabaseConnection>();
    connection.migrate().await?;
    info!("database schema is up to date");
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid CORS origin `{origin}`");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(origins)
}
