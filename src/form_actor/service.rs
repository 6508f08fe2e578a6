use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn, Instrument};

use super::messages::{ForwardCompleted, FormRequest, FormSnapshot, ServiceResponse};
use super::validation::validate;
use crate::clients::FormClient;
use crate::domain::{custom_store_visible, Field, Notice, OrderForwardingRequest};
use crate::error::FormError;
use crate::forwarding::Forwarder;

macro_rules! send_error {
    ($respond_to:expr, $error:expr) => {{
        let _ = $respond_to.send(Err($error));
        return;
    }};
}

/// Owns the form record and drives the submission lifecycle.
///
/// The forwarder runs in its own task so edits and snapshots keep being
/// answered while a submission is outstanding. Its outcome comes back on the
/// completion channel, which is where the submitting flag is cleared.
pub struct FormService<F: Forwarder> {
    receiver: mpsc::Receiver<FormRequest>,
    completions: mpsc::Receiver<ForwardCompleted>,
    completion_sender: mpsc::Sender<ForwardCompleted>,
    forwarder: Arc<F>,
    record: OrderForwardingRequest,
    is_submitting: bool,
    notice: Option<Notice>,
}

impl<F: Forwarder> FormService<F> {
    pub fn new(
        buffer_size: usize,
        initial: OrderForwardingRequest,
        forwarder: F,
    ) -> (Self, FormClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // At most one forward is in flight at a time.
        let (completion_sender, completions) = mpsc::channel(1);
        let service = Self {
            receiver,
            completions,
            completion_sender,
            forwarder: Arc::new(forwarder),
            record: initial,
            is_submitting: false,
            notice: None,
        };
        (service, FormClient::new(sender))
    }

    #[instrument(name = "form_service", skip(self))]
    pub async fn run(mut self) {
        info!("FormService starting");

        loop {
            tokio::select! {
                Some(completed) = self.completions.recv() => {
                    self.handle_forward_completed(completed);
                }
                msg = self.receiver.recv() => match msg {
                    Some(FormRequest::SetField { field, value, respond_to }) => {
                        self.handle_set_field(field, value, respond_to);
                    }
                    Some(FormRequest::Snapshot { respond_to }) => {
                        let _ = respond_to.send(Ok(self.snapshot()));
                    }
                    Some(FormRequest::Submit { respond_to }) => {
                        self.handle_submit(respond_to);
                    }
                    Some(FormRequest::Shutdown) | None => {
                        info!("FormService shutting down");
                        break;
                    }
                },
            }
        }

        // A submission that already started runs to completion.
        if self.is_submitting {
            info!("Waiting for outstanding submission");
            if let Some(completed) = self.completions.recv().await {
                self.handle_forward_completed(completed);
            }
        }

        info!("FormService stopped");
    }

    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            record: self.record.clone(),
            is_submitting: self.is_submitting,
            custom_store_visible: custom_store_visible(self.record.store),
            notice: self.notice.clone(),
        }
    }

    #[instrument(fields(field = %field), skip(self, field, value, respond_to))]
    fn handle_set_field(
        &mut self,
        field: Field,
        value: String,
        respond_to: ServiceResponse<OrderForwardingRequest, FormError>,
    ) {
        debug!("Processing set_field request");

        match self.record.with_field(field, &value) {
            Ok(record) => {
                self.record = record;
                let _ = respond_to.send(Ok(self.record.clone()));
            }
            Err(e) => {
                warn!(error = %e, "Rejected field edit");
                send_error!(respond_to, e);
            }
        }
    }

    #[instrument(
        fields(order_number = %self.record.order_number, recipient = %self.record.recipient_email),
        skip(self, respond_to)
    )]
    fn handle_submit(&mut self, respond_to: ServiceResponse<Notice, FormError>) {
        debug!("Processing submit request");

        if self.is_submitting {
            warn!("Submit ignored while another submission is outstanding");
            send_error!(respond_to, FormError::SubmissionInProgress);
        }

        if let Err(e) = validate(&self.record) {
            warn!(error = %e, "Validation failed");
            self.notice = Some(Notice::missing_fields());
            send_error!(respond_to, e.into());
        }

        self.is_submitting = true;
        info!("Forwarding order");

        let submitted = self.record.clone();
        let forwarder = Arc::clone(&self.forwarder);
        let completions = self.completion_sender.clone();
        tokio::spawn(
            async move {
                let result = forwarder.forward(&submitted).await;
                let completed = ForwardCompleted {
                    submitted,
                    result,
                    respond_to,
                };
                if completions.send(completed).await.is_err() {
                    error!("FormService gone before forwarding completed");
                }
            }
            .in_current_span(),
        );
    }

    #[instrument(fields(order_number = %completed.submitted.order_number), skip(self, completed))]
    fn handle_forward_completed(&mut self, completed: ForwardCompleted) {
        let ForwardCompleted {
            submitted,
            result,
            respond_to,
        } = completed;

        self.is_submitting = false;

        match result {
            Ok(()) => {
                let notice = Notice::forwarded(&submitted.product_name, &submitted.recipient_email);
                self.record = self.record.reset_order_details();
                self.notice = Some(notice.clone());
                info!(product = %submitted.product_name, "Order forwarded successfully");
                let _ = respond_to.send(Ok(notice));
            }
            Err(e) => {
                error!(error = %e, "Forwarding failed");
                self.notice = Some(Notice::forwarding_failed());
                send_error!(respond_to, e.into());
            }
        }
    }
}
