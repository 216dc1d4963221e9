use tracing::{debug, instrument};

use crate::domain::{Order, UpdateOrderStatusRequest};
use crate::error::ApiError;
use crate::op_framework::OperationClient;
use crate::ops::{ListMyOrders, UpdateOrderStatus};

/// Client for the restaurant's incoming orders.
#[derive(Clone)]
pub struct OrderClient {
    list: OperationClient<ListMyOrders>,
    update_status: OperationClient<UpdateOrderStatus>,
}

impl OrderClient {
    pub fn new(
        list: OperationClient<ListMyOrders>,
        update_status: OperationClient<UpdateOrderStatus>,
    ) -> Self {
        Self { list, update_status }
    }

    /// Fetches the order sequence exactly as the backend returns it.
    #[instrument(skip(self))]
    pub async fn get_my_orders(&self) -> Result<Vec<Order>, ApiError> {
        debug!("Sending request");
        self.list.invoke(()).await
    }

    #[allow(dead_code)]
    pub async fn cached_orders(&self) -> Result<Option<Vec<Order>>, ApiError> {
        self.list.data().await
    }

    #[allow(dead_code)]
    #[instrument(skip(self), fields(order_id = %request.order_id))]
    pub async fn update_order_status(
        &self,
        request: UpdateOrderStatusRequest,
    ) -> Result<(), ApiError> {
        debug!("Sending request");
        self.update_status.invoke(request).await
    }
}

crate::impl_op_accessors!(OrderClient {
    list as orders,
    update_status as status_update,
});
