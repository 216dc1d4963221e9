use crate::backend::Backend;
use crate::domain::{UpdateUserRequest, User};
use crate::op_framework::{OpFuture, Operation};

/// Query for the authenticated user's profile.
#[derive(Clone)]
pub struct GetMyUser {
    backend: Backend,
}

impl GetMyUser {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

impl Operation for GetMyUser {
    type Input = ();
    type Output = User;

    fn name(&self) -> &'static str {
        "get_my_user"
    }

    fn run(&self, _input: ()) -> OpFuture<User> {
        let backend = self.backend.clone();
        Box::pin(async move { backend.get_my_user().await })
    }
}

#[derive(Clone)]
pub struct UpdateMyUser {
    backend: Backend,
}

impl UpdateMyUser {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

impl Operation for UpdateMyUser {
    type Input = UpdateUserRequest;
    type Output = User;

    fn name(&self) -> &'static str {
        "update_my_user"
    }

    fn on_success(&self) -> Option<&'static str> {
        Some("User profile updated!")
    }

    fn on_failure(&self) -> Option<&'static str> {
        Some("Unable to update profile")
    }

    fn run(&self, request: UpdateUserRequest) -> OpFuture<User> {
        let backend = self.backend.clone();
        Box::pin(async move { backend.update_my_user(request).await })
    }
}
