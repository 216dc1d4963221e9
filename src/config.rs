/// Runtime configuration for the portal.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the ordering backend, without a trailing slash.
    pub api_base_url: String,
    /// Capacity of every actor mailbox and of the notice channel.
    pub channel_capacity: usize,
}

impl PortalConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            channel_capacity: 32,
        }
    }

    /// Reads `API_BASE_URL` from the environment, falling back to a local
    /// development backend.
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:7000".to_string());
        Self::new(api_base_url)
    }
}
