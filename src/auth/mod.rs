//! Bearer-credential supply.
//!
//! The session actor owns the cached access token and refreshes it through an
//! injected [`TokenSource`] when it is missing or about to expire. Every
//! data-access operation asks the [`SessionClient`] for a token at call time,
//! so no ambient/global credential state exists anywhere in the crate.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::error::AuthError;

/// A freshly minted credential and its lifetime.
#[derive(Debug, Clone)]
pub struct BearerToken {
    pub access_token: String,
    pub expires_in: Duration,
}

pub type TokenFuture = Pin<Box<dyn Future<Output = Result<BearerToken, AuthError>> + Send>>;

/// Asynchronous credential mint, e.g. an OAuth token-endpoint round trip.
pub type TokenSource = Box<dyn Fn() -> TokenFuture + Send + Sync>;

/// Token source that always yields the same long-lived token. Useful for
/// tests and for environments that hand the process a pre-issued token.
pub fn static_source(token: impl Into<String>) -> TokenSource {
    let token = token.into();
    Box::new(move || {
        let access_token = token.clone();
        Box::pin(async move {
            Ok(BearerToken {
                access_token,
                expires_in: Duration::from_secs(3600),
            })
        })
    })
}

#[derive(Debug)]
pub enum SessionRequest {
    AccessToken {
        respond_to: oneshot::Sender<Result<String, AuthError>>,
    },
    Invalidate {
        respond_to: oneshot::Sender<()>,
    },
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Actor owning the cached bearer credential.
pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    source: TokenSource,
    cached: Option<CachedToken>,
    leeway: Duration,
}

impl SessionActor {
    pub fn new(buffer_size: usize, source: TokenSource) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            source,
            cached: None,
            leeway: Duration::from_secs(30),
        };
        (actor, SessionClient { sender })
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::AccessToken { respond_to } => {
                    let _ = respond_to.send(self.access_token().await);
                }
                SessionRequest::Invalidate { respond_to } => {
                    self.cached = None;
                    let _ = respond_to.send(());
                }
            }
        }
    }

    async fn access_token(&mut self) -> Result<String, AuthError> {
        if let Some(cached) = &self.cached {
            if Instant::now() + self.leeway < cached.expires_at {
                return Ok(cached.access_token.clone());
            }
        }
        let token = (self.source)().await?;
        debug!("minted fresh access token");
        let access_token = token.access_token.clone();
        self.cached = Some(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + token.expires_in,
        });
        Ok(access_token)
    }
}

/// Handle for requesting a valid bearer token.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    #[instrument(skip(self))]
    pub async fn access_token(&self) -> Result<String, AuthError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::AccessToken { respond_to })
            .await
            .map_err(|_| AuthError::SessionClosed("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| AuthError::SessionClosed("Actor dropped".to_string()))?
    }

    /// Drops the cached token so the next request mints a fresh one.
    #[allow(dead_code)]
    #[instrument(skip(self))]
    pub async fn invalidate(&self) -> Result<(), AuthError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Invalidate { respond_to })
            .await
            .map_err(|_| AuthError::SessionClosed("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| AuthError::SessionClosed("Actor dropped".to_string()))
    }
}
