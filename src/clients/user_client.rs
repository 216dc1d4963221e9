use tracing::{debug, instrument};

use crate::domain::{UpdateUserRequest, User};
use crate::error::ApiError;
use crate::op_framework::OperationClient;
use crate::ops::{GetMyUser, UpdateMyUser};

/// Client for the authenticated user's profile.
#[derive(Clone)]
pub struct UserClient {
    get: OperationClient<GetMyUser>,
    update: OperationClient<UpdateMyUser>,
}

impl UserClient {
    pub fn new(get: OperationClient<GetMyUser>, update: OperationClient<UpdateMyUser>) -> Self {
        Self { get, update }
    }

    #[instrument(skip(self))]
    pub async fn get_my_user(&self) -> Result<User, ApiError> {
        debug!("Sending request");
        self.get.invoke(()).await
    }

    pub async fn cached_user(&self) -> Result<Option<User>, ApiError> {
        self.get.data().await
    }

    #[instrument(skip(self, request))]
    pub async fn update_my_user(&self, request: UpdateUserRequest) -> Result<User, ApiError> {
        debug!("Sending request");
        self.update.invoke(request).await
    }
}

crate::impl_op_accessors!(UserClient {
    get as profile,
    update as save,
});
