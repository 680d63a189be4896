//! Probe the dashboard metrics of a running backend.
//!
//! ```bash
//! cargo run --example dashboard_probe -- http://localhost:3001 <token>
//! ```

use lotus_client::ClientConfig;
use shared::models::Period;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let api_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:3001".to_string());

    let mut config = ClientConfig::new(&api_url);
    if let Some(token) = args.next() {
        config = config.with_token(token);
    }
    let client = config.build();

    let period = Period::Day;
    let (automation, new_customers, returning) = tokio::join!(
        client.avg_automation_rate(period),
        client.new_customers(period),
        client.returning_customers(period),
    );

    tracing::info!(value = ?automation, "automation rate (percent)");
    tracing::info!(value = ?new_customers, "new customers");
    tracing::info!(value = ?returning, "returning customers");

    Ok(())
}
