use tracing::{error, info, instrument};

use super::AppConfig;
use crate::clients::FormClient;
use crate::domain::OrderForwardingRequest;
use crate::form_actor::FormService;
use crate::forwarding::{Forwarder, SimulatedForwarder};

/// Starts the form service and hands out its client.
pub struct FormSystem {
    pub form_client: FormClient,
    handle: tokio::task::JoinHandle<()>,
}

impl FormSystem {
    /// Start with the simulated forwarder described by `config`.
    pub fn new(config: &AppConfig) -> Self {
        let forwarder = SimulatedForwarder::new(config.forward_delay).failing(config.simulate_failure);
        Self::with_forwarder(config, forwarder)
    }

    #[instrument(name = "form_system", skip(config, forwarder), fields(sender_name = %config.sender_name))]
    pub fn with_forwarder<F: Forwarder>(config: &AppConfig, forwarder: F) -> Self {
        info!("Starting form system");

        let initial = OrderForwardingRequest::new(config.sender_name.clone());
        let (service, form_client) = FormService::new(config.mailbox_size, initial, forwarder);
        let handle = tokio::spawn(service.run());

        info!("Form system started");
        Self { form_client, handle }
    }

    /// Stops the service. An outstanding submission finishes first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down form system");

        let _ = self.form_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Form service task failed");
            return Err(format!("Form service task failed: {:?}", e));
        }

        info!("Form system shutdown complete");
        Ok(())
    }
}
