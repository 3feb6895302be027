use color_eyre::eyre::Result;
use sessiongate::{
    ConfiguredSessionStore, ConfiguredVerifier, SessionGateService,
    adapters::config::SessionGateSettings,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Standalone session gate built from `config/base.json` and `SESSIONGATE__*` variables
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = SessionGateSettings::load()?;

    let session_store = ConfiguredSessionStore::from_settings(&settings)?;
    let verifier = ConfiguredVerifier::from_settings(&settings.verifier)?;

    tracing::info!(
        store = ?settings.store.backend,
        verifier = ?settings.verifier.backend,
        "Starting session gate..."
    );

    let service = SessionGateService::new(session_store, verifier, &settings);

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;

    service
        .run_standalone(listener, Some(settings.allowed_origins.clone()))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
