use tokio::sync::mpsc;
use tracing::{debug, instrument};

use super::macros::client_method;
use crate::domain::{Field, Notice, OrderForwardingRequest};
use crate::error::FormError;
use crate::form_actor::{FormRequest, FormSnapshot};

/// Handle to a running `FormService`. Cheap to clone; every clone talks to the
/// same form.
#[derive(Clone)]
pub struct FormClient {
    sender: mpsc::Sender<FormRequest>,
}

impl FormClient {
    pub fn new(sender: mpsc::Sender<FormRequest>) -> Self {
        Self { sender }
    }

    /// Edits a field addressed by its form name, e.g. `recipientEmail`.
    pub async fn set_field_named(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<OrderForwardingRequest, FormError> {
        let field: Field = name.parse()?;
        self.set_field(field, value.into()).await
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), FormError> {
        debug!("Sending shutdown request");
        self.sender
            .send(FormRequest::Shutdown)
            .await
            .map_err(|e| FormError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(FormClient => fn set_field(field: Field, value: String) -> OrderForwardingRequest as FormRequest::SetField, Error = FormError);
client_method!(FormClient => fn snapshot() -> FormSnapshot as FormRequest::Snapshot, Error = FormError);
client_method!(FormClient => fn submit() -> Notice as FormRequest::Submit, Error = FormError);
