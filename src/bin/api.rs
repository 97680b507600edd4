use anyhow::Result;
use domain_rater::{app_state::AppState, config::Config, logging, web};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init_tracing(config.log_format())?;

    let app = web::router(AppState::default());
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "domain rater listening");

    axum::serve(listener, app).await?;
    Ok(())
}
