//! User-profile page composition.
//!
//! Owns no state of its own: everything it shows comes from the user client,
//! and saving delegates straight back to it.

use crate::clients::UserClient;
use crate::domain::{UpdateUserRequest, User};
use crate::error::ApiError;
use crate::op_framework::OpState;

/// What the page currently presents.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileView {
    Loading,
    LoadFailed,
    Form(ProfileForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub current_user: User,
    pub is_saving: bool,
}

pub struct UserProfilePage {
    users: UserClient,
}

impl UserProfilePage {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }

    /// Starts the current-user fetch and waits for it to settle, as happens
    /// when the page is first shown.
    pub async fn load(&self) -> Result<User, ApiError> {
        self.users.get_my_user().await
    }

    /// Samples the collaborators and derives the view: loading until the
    /// fetch settles, an error indicator when no user could be loaded, the
    /// bound form otherwise.
    pub async fn view(&self) -> Result<ProfileView, ApiError> {
        match self.users.profile_state().await? {
            OpState::Idle | OpState::InFlight => Ok(ProfileView::Loading),
            OpState::Failed(_) => Ok(ProfileView::LoadFailed),
            OpState::Succeeded => match self.users.cached_user().await? {
                Some(current_user) => Ok(ProfileView::Form(ProfileForm {
                    current_user,
                    is_saving: self.users.save_state().await?.is_loading(),
                })),
                None => Ok(ProfileView::LoadFailed),
            },
        }
    }

    /// The form's save callback.
    #[allow(dead_code)]
    pub async fn save(&self, request: UpdateUserRequest) -> Result<User, ApiError> {
        self.users.update_my_user(request).await
    }
}
