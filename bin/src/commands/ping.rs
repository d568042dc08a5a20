//! Ping command implementation.
//!
//! Checks that the remote quote API is reachable and lists its symbols.

use crate::settings::Settings;
use anyhow::{Context, Result, bail};

/// Query the remote health and symbol endpoints.
pub(crate) async fn ping(settings: &Settings) -> Result<()> {
    let client = settings.client()?;
    println!("API:     {}", client.base_url());

    let health = client
        .health()
        .await
        .context("Health check failed")?;
    println!("Status:  {}", health.status);
    if let Some(message) = &health.message {
        println!("Message: {message}");
    }
    if !health.is_healthy() {
        bail!("Quote API reports status '{}'", health.status);
    }

    let symbols = client.symbols().await.context("Failed to list symbols")?;
    println!("\n{:<12} {}", "SYMBOL", "NAME");
    println!("{}", "-".repeat(40));
    for (symbol, name) in &symbols.symbols {
        println!("{symbol:<12} {name}");
    }
    println!("\nTotal: {} symbols", symbols.count);
    Ok(())
}
