use cliprelay_core::ServerConfig;
use cliprelay_server::setup;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;

    // Initialize the application (state, routes)
    let (_state, router) = setup::initialize_app(config.clone());

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
