use std::sync::Arc;

use bruteforce_api::{adapters::outbound::leetcode::LeetCodeAdapter, config, router};
use leetcode::LeetCodeClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,bruteforce_api=debug,leetcode=debug,tower_http=debug")
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = config::read_config()?;
    tracing::debug!(?config, "Loaded configuration");

    let catalog = LeetCodeAdapter::new(LeetCodeClient::new(config.leetcode.clone()));
    let app = router::create(Arc::new(catalog), &config);

    let address = config.application.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Server running at http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
