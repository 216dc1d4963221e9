//! # Mock Framework
//!
//! Utilities for testing the resource clients and pages in isolation.
//!
//! Instead of spinning up an [`OperationActor`](crate::op_framework::OperationActor)
//! (and with it a live HTTP backend), tests get an
//! [`OperationClient`] whose messages arrive on a channel the test controls.
//! Helpers like [`expect_invoke`] or [`expect_state`] assert which request
//! was sent and let the test script the response deterministically.

use tokio::sync::{mpsc, oneshot};

use crate::error::ApiError;
use crate::op_framework::{OpRequest, OpState, Operation, OperationClient};

/// Creates a mock operation client and a receiver for asserting requests.
pub fn create_mock_client<Op: Operation>(
    buffer_size: usize,
) -> (OperationClient<Op>, mpsc::Receiver<OpRequest<Op>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OperationClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Invoke request.
pub async fn expect_invoke<Op: Operation>(
    receiver: &mut mpsc::Receiver<OpRequest<Op>>,
) -> Option<(Op::Input, oneshot::Sender<Result<Op::Output, ApiError>>)> {
    match receiver.recv().await {
        Some(OpRequest::Invoke { input, respond_to }) => Some((input, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a State request.
pub async fn expect_state<Op: Operation>(
    receiver: &mut mpsc::Receiver<OpRequest<Op>>,
) -> Option<oneshot::Sender<OpState>> {
    match receiver.recv().await {
        Some(OpRequest::State { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Data request.
pub async fn expect_data<Op: Operation>(
    receiver: &mut mpsc::Receiver<OpRequest<Op>>,
) -> Option<oneshot::Sender<Option<Op::Output>>> {
    match receiver.recv().await {
        Some(OpRequest::Data { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Reset request.
pub async fn expect_reset<Op: Operation>(
    receiver: &mut mpsc::Receiver<OpRequest<Op>>,
) -> Option<oneshot::Sender<()>> {
    match receiver.recv().await {
        Some(OpRequest::Reset { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::OrderClient;
    use crate::domain::UpdateOrderStatusRequest;

    #[tokio::test]
    async fn mock_client_scripts_a_status_update() {
        let (list_client, _list_rx) = create_mock_client(8);
        let (status_client, mut status_rx) = create_mock_client(8);
        let orders = OrderClient::new(list_client, status_client);

        let update_task = tokio::spawn(async move {
            orders
                .update_order_status(UpdateOrderStatusRequest {
                    order_id: "ord_1".into(),
                    status: "Confirmed".into(),
                })
                .await
        });

        let (request, respond_to) =
            expect_invoke(&mut status_rx).await.expect("Expected Invoke request");
        assert_eq!(request.order_id, "ord_1");
        assert_eq!(request.status, "Confirmed");
        respond_to.send(Ok(())).unwrap();

        assert!(update_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn mock_client_scripts_a_reset() {
        let (list_client, _list_rx) = create_mock_client(8);
        let (status_client, mut status_rx) = create_mock_client(8);
        let orders = OrderClient::new(list_client, status_client);

        let reset_task = tokio::spawn(async move { orders.reset_status_update().await });

        let respond_to = expect_reset(&mut status_rx).await.expect("Expected Reset request");
        respond_to.send(()).unwrap();

        assert!(reset_task.await.unwrap().is_ok());
    }
}
