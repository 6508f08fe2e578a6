//! # Mock Framework
//!
//! Utilities for testing the form against a forwarder we control.
//!
//! Use [`create_mock_forwarder`] to get a forwarder and a receiver. Every
//! `forward` call shows up on the receiver as a [`ForwardCall`]; the test decides
//! when and how it resolves through the call's responder.

use tokio::sync::{mpsc, oneshot};

use crate::domain::OrderForwardingRequest;
use crate::error::ForwardingError;
use crate::forwarding::Forwarder;

#[derive(Debug)]
pub struct ForwardCall {
    pub request: OrderForwardingRequest,
    pub respond_to: oneshot::Sender<Result<(), ForwardingError>>,
}

pub struct MockForwarder {
    sender: mpsc::Sender<ForwardCall>,
}

impl Forwarder for MockForwarder {
    async fn forward(&self, request: &OrderForwardingRequest) -> Result<(), ForwardingError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ForwardCall {
                request: request.clone(),
                respond_to,
            })
            .await
            .map_err(|_| ForwardingError::Transport("Mock receiver closed".to_string()))?;
        response
            .await
            .map_err(|_| ForwardingError::Transport("Mock responder dropped".to_string()))?
    }
}

/// Creates a mock forwarder and the receiver its calls arrive on.
pub fn create_mock_forwarder(buffer_size: usize) -> (MockForwarder, mpsc::Receiver<ForwardCall>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MockForwarder { sender }, receiver)
}

/// Waits for the next forward call.
pub async fn expect_forward(receiver: &mut mpsc::Receiver<ForwardCall>) -> Option<ForwardCall> {
    receiver.recv().await
}

/// Asserts that no forward call is waiting right now.
pub fn expect_no_forward(receiver: &mut mpsc::Receiver<ForwardCall>) {
    if let Ok(call) = receiver.try_recv() {
        panic!("Unexpected forward call for order {:?}", call.request.order_number);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_forwarder() {
        let (forwarder, mut receiver) = create_mock_forwarder(10);

        let forward_task = tokio::spawn(async move {
            let request = OrderForwardingRequest {
                order_number: "#7".into(),
                ..OrderForwardingRequest::default()
            };
            forwarder.forward(&request).await
        });

        let call = expect_forward(&mut receiver).await.expect("Expected forward call");
        assert_eq!(call.request.order_number, "#7");
        call.respond_to
            .send(Err(ForwardingError::Rejected("bounced".into())))
            .unwrap();

        let result = forward_task.await.unwrap();
        assert_eq!(result, Err(ForwardingError::Rejected("bounced".into())));
        expect_no_forward(&mut receiver);
    }
}
