use std::sync::Arc;

use shipdocs::config::ServerConfig;
use shipdocs::error::Result;
use shipdocs::extract::{Extractor, ExtractorConfig};
use shipdocs::render::{FileTemplateStore, Renderer};
use shipdocs::server::{AppState, api_routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    let extractor = Arc::new(Extractor::new(&ExtractorConfig::from_env())?);
    let store = Arc::new(FileTemplateStore::new(config.template_dir.clone()));
    let renderer = Arc::new(Renderer::new(store));

    eprintln!("📦 shipdocs v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Extract API: http://{}/api/extract", config.bind_addr);
    eprintln!(
        "   Document API: http://{}/api/documents/{{template}}",
        config.bind_addr
    );
    eprintln!("   Templates: {}\n", config.template_dir.display());

    let app = api_routes(AppState {
        extractor,
        renderer,
    });
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "shipdocs server started");
    axum::serve(listener, app).await?;

    Ok(())
}
