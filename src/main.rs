use tracing::info;
use tracing_subscriber::EnvFilter;
use webexdesk::{AppState, app, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("webexdesk=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let bind = config.bind;
    info!("using Webex API at {}", config.api_base);

    let app = app(AppState::new(config)?)?;

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on http://{bind}");
    axum::serve(listener, app).await?;

    Ok(())
}
