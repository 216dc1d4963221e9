use crate::backend::Backend;
use crate::domain::{Order, UpdateOrderStatusRequest};
use crate::op_framework::{OpFuture, Operation};

/// Query for the orders placed against the owner's restaurant.
#[derive(Clone)]
pub struct ListMyOrders {
    backend: Backend,
}

impl ListMyOrders {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

impl Operation for ListMyOrders {
    type Input = ();
    type Output = Vec<Order>;

    fn name(&self) -> &'static str {
        "fetch_my_orders"
    }

    fn run(&self, _input: ()) -> OpFuture<Vec<Order>> {
        let backend = self.backend.clone();
        Box::pin(async move { backend.get_my_restaurant_orders().await })
    }
}

#[derive(Clone)]
pub struct UpdateOrderStatus {
    backend: Backend,
}

impl UpdateOrderStatus {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

impl Operation for UpdateOrderStatus {
    type Input = UpdateOrderStatusRequest;
    type Output = ();

    fn name(&self) -> &'static str {
        "update_order_status"
    }

    fn on_success(&self) -> Option<&'static str> {
        Some("Order updated")
    }

    fn on_failure(&self) -> Option<&'static str> {
        Some("Unable to update status")
    }

    fn run(&self, request: UpdateOrderStatusRequest) -> OpFuture<()> {
        let backend = self.backend.clone();
        Box::pin(async move { backend.update_order_status(request).await })
    }
}
