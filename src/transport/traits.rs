//! Transport capability traits.

use crate::transport::HttpClient;

/// Produces configured HTTP clients for logical client names.
///
/// Base addresses, TLS, proxies, and timeouts are the factory's
/// responsibility; the request pipeline only builds requests and classifies
/// responses. Implementations must be safe to share across arbitrarily many
/// concurrent calls.
pub trait HttpClientFactory: Send + Sync {
    /// Create (or hand out) a client for the given logical name.
    fn create_client(&self, name: &str) -> HttpClient;
}

/// Factory handing out clones of a single shared client.
///
/// The logical name is ignored; per-name configuration belongs in a custom
/// factory implementation.
#[derive(Debug, Clone, Default)]
pub struct DefaultClientFactory {
    client: HttpClient,
}

impl DefaultClientFactory {
    /// Create a factory around a default-configured client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory around a pre-configured client.
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }
}

impl HttpClientFactory for DefaultClientFactory {
    fn create_client(&self, _name: &str) -> HttpClient {
        self.client.clone()
    }
}
