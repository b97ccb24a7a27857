//! Effective configuration display command.

use anyhow::Result;
use console::style;

use pairgate_types::config::ServerConfig;

/// Print the configuration the server would start with.
pub fn show_config(config: &ServerConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    let upstream = match config.upstream.normalized_base_url() {
        Some(url) => style(url.to_string()).cyan(),
        None => style("not configured".to_string()).red(),
    };

    println!();
    println!(
        "  {} pairgate v{}",
        style("⚙").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  {:<18} {}", style("Listen").dim(), config.bind_addr());
    println!("  {:<18} {}", style("Upstream").dim(), upstream);
    println!(
        "  {:<18} {}s",
        style("Upstream timeout").dim(),
        config.upstream.timeout().as_secs()
    );
    println!("  {:<18} {}", style("User agent").dim(), config.upstream.user_agent);
    println!();

    Ok(())
}
