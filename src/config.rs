//! Configuration constants for the client.

use std::time::Duration;

/// Default user agent sent on every request.
pub const USER_AGENT: &str = concat!("envelope-client/", env!("CARGO_PKG_VERSION"));

/// Connect timeout for HTTP requests.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for a complete request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Logical client name handed to the transport factory when the builder
/// does not configure one.
pub const DEFAULT_CLIENT_NAME: &str = "default";
