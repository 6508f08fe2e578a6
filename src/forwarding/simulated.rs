use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::{ForwardedEmail, Forwarder};
use crate::domain::OrderForwardingRequest;
use crate::error::ForwardingError;

/// Stand-in for a real email service: waits, logs the composed message and
/// reports success (or failure, when told to).
#[derive(Debug, Clone)]
pub struct SimulatedForwarder {
    delay: Duration,
    fail: bool,
}

impl SimulatedForwarder {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    pub fn failing(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }
}

impl Forwarder for SimulatedForwarder {
    #[instrument(
        name = "simulated_forward",
        fields(order_number = %request.order_number, recipient = %request.recipient_email),
        skip(self, request)
    )]
    async fn forward(&self, request: &OrderForwardingRequest) -> Result<(), ForwardingError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "Simulating email delivery");
        tokio::time::sleep(self.delay).await;

        let payload = serde_json::to_string(request)
            .map_err(|e| ForwardingError::Rejected(e.to_string()))?;
        debug!(%payload, "Forwarding email with data");

        if self.fail {
            warn!("Simulated forwarding failure");
            return Err(ForwardingError::Transport("simulated failure".to_string()));
        }

        let email = ForwardedEmail::compose(request);
        info!(from = %email.from, to = %email.to, subject = %email.subject, "Email forwarded");
        Ok(())
    }
}
