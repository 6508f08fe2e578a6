//! The boundary between the form and whatever actually sends the email.

mod email;
mod simulated;

pub use email::*;
pub use simulated::*;

use std::future::Future;

use crate::domain::OrderForwardingRequest;
use crate::error::ForwardingError;

/// Sends one order confirmation on to its recipient.
///
/// The form awaits exactly one outcome per submission and never calls this
/// again until that outcome has arrived.
pub trait Forwarder: Send + Sync + 'static {
    fn forward(
        &self,
        request: &OrderForwardingRequest,
    ) -> impl Future<Output = Result<(), ForwardingError>> + Send;
}
