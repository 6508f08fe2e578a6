use tokio::sync::oneshot;

use crate::domain::{Field, Notice, OrderForwardingRequest};
use crate::error::{FormError, ForwardingError};

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Everything the form can currently show.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub record: OrderForwardingRequest,
    pub is_submitting: bool,
    pub custom_store_visible: bool,
    pub notice: Option<Notice>,
}

#[derive(Debug)]
pub enum FormRequest {
    SetField {
        field: Field,
        value: String,
        respond_to: ServiceResponse<OrderForwardingRequest, FormError>,
    },
    Snapshot {
        respond_to: ServiceResponse<FormSnapshot, FormError>,
    },
    Submit {
        respond_to: ServiceResponse<Notice, FormError>,
    },
    Shutdown,
}

/// Sent back to the service by the task that ran the forwarder.
#[derive(Debug)]
pub struct ForwardCompleted {
    pub submitted: OrderForwardingRequest,
    pub result: Result<(), ForwardingError>,
    pub respond_to: ServiceResponse<Notice, FormError>,
}
