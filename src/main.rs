//! # Order Forwarding
//!
//! A proxy-shopping form that collects an order confirmation and hands it to a
//! forwarding service, reporting the outcome as a notice.
//!
//! - **Domain** - the record, its fields and notices → [`domain`]
//! - **Form service** - owns the record, validates and submits → [`form_actor::FormService`]
//! - **Client** - cloneable handle for talking to the service → [`clients::FormClient`]
//! - **Forwarder** - the send boundary, simulated for now → [`forwarding::Forwarder`]
//! - **Presentation** - header, form and page rendered as text → [`presentation`]
//! - **System** - config, tracing, startup and shutdown → [`app_system`]
//!
//! ```bash
//! order_forwarding --set senderEmail=proxy@joking.wtf --set recipientEmail=me@example.com \
//!     --set storeName=amazon --set orderNumber=#1 --set productName=Widget
//! RUST_LOG=debug order_forwarding --simulate-failure ...
//! ```

mod app_system;
mod cli;
mod clients;
mod domain;
mod error;
mod form_actor;
mod forwarding;
mod presentation;

#[cfg(test)]
mod mock_framework;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, AppConfig, FormSystem};
use crate::cli::Cli;
use crate::presentation::render_page;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(AppConfig::from_env());

    setup_tracing(&config.log_filter);

    info!("Starting order forwarding");

    let system = FormSystem::new(&config);
    let client = system.form_client.clone();

    println!("{}", render_page(&client.snapshot().await?));

    let span = tracing::info_span!("form_input");
    async {
        for (field, value) in &cli.assignments {
            client
                .set_field_named(field, value.as_str())
                .await
                .with_context(|| format!("could not set {}", field))?;
        }
        Ok::<_, anyhow::Error>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("submission");
    let outcome = async {
        info!("Submitting form");
        client.submit().await
    }
    .instrument(span)
    .await;

    let notice = match &outcome {
        Ok(notice) => {
            info!(title = %notice.title, "Submission finished");
            Some(notice.clone())
        }
        Err(e) => {
            error!(error = %e, "Submission failed");
            e.notice()
        }
    };
    match (notice, &outcome) {
        (Some(notice), _) if notice.is_error() => eprintln!("{}", notice),
        (Some(notice), _) => println!("{}", notice),
        (None, Err(e)) => eprintln!("{}", e),
        (None, Ok(_)) => {}
    }

    println!();
    println!("{}", render_page(&client.snapshot().await?));

    system.shutdown().await.map_err(|e| anyhow!(e))?;

    info!("Order forwarding finished");
    Ok(())
}
