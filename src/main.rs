use dotenvy::dotenv;
use impulse_buddy::{
    ai::InsightClient,
    api,
    config::{self, settings::INSIGHT_API_KEY_VAR},
    errors::Result,
    tasks,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Initialize database
    let database_url = config::database::get_database_url();
    let db = config::database::create_connection(&database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
    config::database::create_tables(&db).await?;

    // 5. Set up the insight proxy if an API key is available
    let insight = match InsightClient::from_config(&app_config.insight) {
        Ok(client) => Some(client),
        Err(_) => {
            warn!("{INSIGHT_API_KEY_VAR} not set; /api/chat will be unavailable");
            None
        }
    };

    // 6. Start the cooldown poller and serve the API
    // Dropping the handle detaches the task; it runs for the process lifetime.
    let _cooldown_poller = tasks::spawn_cooldown_poller(db.clone());

    let router = api::build_router(api::AppState::new(db, insight));

    let listener = tokio::net::TcpListener::bind(&app_config.server.bind_addr).await?;
    info!("Listening on {}", app_config.server.bind_addr);
    axum::serve(listener, router).await?;

    Ok(())
}
