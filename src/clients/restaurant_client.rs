use tracing::{debug, instrument};

use crate::domain::{Restaurant, RestaurantForm};
use crate::error::ApiError;
use crate::op_framework::OperationClient;
use crate::ops::{CreateMyRestaurant, GetMyRestaurant, UpdateMyRestaurant};

/// Client for the owner's restaurant profile.
#[derive(Clone)]
pub struct RestaurantClient {
    get: OperationClient<GetMyRestaurant>,
    create: OperationClient<CreateMyRestaurant>,
    update: OperationClient<UpdateMyRestaurant>,
}

impl RestaurantClient {
    pub fn new(
        get: OperationClient<GetMyRestaurant>,
        create: OperationClient<CreateMyRestaurant>,
        update: OperationClient<UpdateMyRestaurant>,
    ) -> Self {
        Self { get, create, update }
    }

    #[instrument(skip(self))]
    pub async fn get_my_restaurant(&self) -> Result<Restaurant, ApiError> {
        debug!("Sending request");
        self.get.invoke(()).await
    }

    /// Last successfully fetched or persisted-by-fetch restaurant, if any.
    #[allow(dead_code)]
    pub async fn cached_restaurant(&self) -> Result<Option<Restaurant>, ApiError> {
        self.get.data().await
    }

    #[allow(dead_code)]
    #[instrument(skip(self, form))]
    pub async fn create_my_restaurant(&self, form: RestaurantForm) -> Result<Restaurant, ApiError> {
        debug!("Sending request");
        self.create.invoke(form).await
    }

    #[allow(dead_code)]
    #[instrument(skip(self, form))]
    pub async fn update_my_restaurant(&self, form: RestaurantForm) -> Result<Restaurant, ApiError> {
        debug!("Sending request");
        self.update.invoke(form).await
    }
}

crate::impl_op_accessors!(RestaurantClient {
    get as fetch,
    create as create,
    update as update,
});
