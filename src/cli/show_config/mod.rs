//! Config command - prints the effective configuration

use crate::config::AppConfig;

/// Load configuration the same way `serve` does and print it as JSON
pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    println!("{}", render(&config)?);

    Ok(())
}

fn render(config: &AppConfig) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&config.redacted())?)
}
