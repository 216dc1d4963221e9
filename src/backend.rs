//! HTTP contract with the ordering backend.
//!
//! One method per endpoint. Every call obtains a bearer token from the
//! session, issues a single request, and maps any non-success status to
//! [`ApiError::RequestFailed`] with that operation's fixed message. Error
//! bodies are never surfaced to callers; the create path reads the body for
//! diagnostic logging only.

use tracing::debug;

use crate::auth::SessionClient;
use crate::domain::{Order, Restaurant, RestaurantForm, UpdateOrderStatusRequest, UpdateUserRequest, User};
use crate::error::ApiError;

#[derive(Clone)]
pub struct Backend {
    http: reqwest::Client,
    base_url: String,
    session: SessionClient,
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

fn decode(e: reqwest::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

impl Backend {
    pub fn new(base_url: impl Into<String>, session: SessionClient) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn bearer(&self) -> Result<String, ApiError> {
        Ok(self.session.access_token().await?)
    }

    pub async fn get_my_restaurant(&self) -> Result<Restaurant, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url("/api/my/restaurant"))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(ApiError::request_failed("Failed to get restaurant"));
        }
        response.json().await.map_err(decode)
    }

    pub async fn create_my_restaurant(&self, form: RestaurantForm) -> Result<Restaurant, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(self.url("/api/my/restaurant"))
            .bearer_auth(&token)
            .multipart(form.into_multipart()?)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            // The rejection body is useful for diagnosis but must not reach callers.
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            debug!(%status, body, "restaurant creation rejected");
            return Err(ApiError::request_failed("Failed to create restaurant"));
        }
        response.json().await.map_err(decode)
    }

    pub async fn update_my_restaurant(&self, form: RestaurantForm) -> Result<Restaurant, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .put(self.url("/api/my/restaurant"))
            .bearer_auth(&token)
            .multipart(form.into_multipart()?)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(ApiError::request_failed("Failed to update restaurant"));
        }
        response.json().await.map_err(decode)
    }

    pub async fn get_my_restaurant_orders(&self) -> Result<Vec<Order>, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url("/api/my/restaurant/order"))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(ApiError::request_failed("Failed to fetch orders"));
        }
        response.json().await.map_err(decode)
    }

    /// Partial update of one order's status sub-resource. The response body
    /// is intentionally discarded.
    pub async fn update_order_status(
        &self,
        request: UpdateOrderStatusRequest,
    ) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .patch(self.url(&format!(
                "/api/my/restaurant/order/{}/status",
                request.order_id
            )))
            .bearer_auth(&token)
            .json(&serde_json::json!({ "status": request.status }))
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(ApiError::request_failed("Failed to update status"));
        }
        Ok(())
    }

    pub async fn get_my_user(&self) -> Result<User, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url("/api/my/user"))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(ApiError::request_failed("Failed to fetch user"));
        }
        response.json().await.map_err(decode)
    }

    pub async fn update_my_user(&self, request: UpdateUserRequest) -> Result<User, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .put(self.url("/api/my/user"))
            .bearer_auth(&token)
            .json(&request)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(ApiError::request_failed("Failed to update user"));
        }
        response.json().await.map_err(decode)
    }
}
