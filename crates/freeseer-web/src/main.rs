use anyhow::Context;
use freeseer_core::{
    ConfigurationContext,
    ProfileManager,
};
use freeseer_web::config::ApiServerConfig;
use freeseer_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    freeseer_core::logging::init();

    let api_config = ApiServerConfig::from_env()?;

    tracing::info!("Starting Freeseer configuration API");
    tracing::info!("Bind address: {}", api_config.bind_addr);

    let profiles = ProfileManager::from_env();
    tracing::info!("Profile directory: {}", profiles.base_dir().display());

    let context = ConfigurationContext::initialize(&profiles, api_config.profile.as_deref())
        .context("Failed to initialize configuration")?;

    let app = freeseer_web::app(AppState::new(context), api_config.cors_allow_all);

    tracing::info!("Listening on {}", api_config.bind_addr);
    let listener = tokio::net::TcpListener::bind(api_config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server");
}
