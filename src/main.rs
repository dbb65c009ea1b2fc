use std::sync::Arc;

use credit_coach::config::ScoringConfig;
use credit_coach::render::CliSurface;
use credit_coach::scoring::ScoringClient;
use credit_coach::session::WizardSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install rustls crypto provider before any TLS usage
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ScoringConfig::from_env();

    eprintln!("💳 Credit Coach v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Scoring API: {}", config.base_url);
    eprintln!("   Fill in each step, then submit on the last one. quit to exit.\n");

    let client = Arc::new(ScoringClient::new(&config));

    // Reachability probe; failures are logged, never fatal.
    if let Err(e) = client.health().await {
        tracing::warn!("Scoring service not reachable yet: {e}");
    }

    let mut surface = CliSurface::new();
    let mut session = WizardSession::new(client);
    session.run(&mut surface).await;

    Ok(())
}
