use assetgate_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    assetgate_api::telemetry::init_telemetry();

    // Load and validate configuration
    let config = Config::from_env()?;
    config.validate()?;

    // Initialize the application (storage, state, routes)
    let (_state, router) = assetgate_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    assetgate_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
