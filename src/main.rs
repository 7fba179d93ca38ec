use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portops::infrastructure::AppState;
use portops::{config, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portops=debug,portops_backoffice=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let mut config = config::Config::from_env();

    // Check for --port CLI argument
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--port")
        && let Some(port) = args.get(pos + 1).and_then(|v| v.parse().ok())
    {
        config.port = port;
    }

    tracing::info!(
        "Referential API: {}, port-ops API: {}",
        config.referential_api_url,
        config.port_ops_api_url
    );

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize backend clients: {}", e);
            std::process::exit(1);
        }
    };

    let app = server::build_router(state, &config.cors_allowed_origins);

    if let Err(e) = server::serve(app, config.port).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
