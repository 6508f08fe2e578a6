use clap::Parser;

use crate::app_system::AppConfig;

/// Fill in and forward one order confirmation.
#[derive(Parser, Debug)]
#[command(name = "order_forwarding")]
#[command(about = "Proxy order forwarding form", long_about = None)]
pub struct Cli {
    /// Field edits applied in order, e.g. --set recipientEmail=me@example.com
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub assignments: Vec<(String, String)>,

    /// Simulated delivery time in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Make the simulated forwarder fail
    #[arg(long, default_value_t = false)]
    pub simulate_failure: bool,

    /// Sender identity the form starts with
    #[arg(long)]
    pub sender_name: Option<String>,
}

impl Cli {
    /// Layers the command-line flags over `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(delay_ms) = self.delay_ms {
            config.forward_delay = std::time::Duration::from_millis(delay_ms);
        }
        if self.simulate_failure {
            config.simulate_failure = true;
        }
        if let Some(sender_name) = &self.sender_name {
            config.sender_name = sender_name.clone();
        }
        config
    }
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(field, value)| (field.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected FIELD=VALUE, got {:?}", raw))
}
