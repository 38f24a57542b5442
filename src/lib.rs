//! # envelope-client
//!
//! Typed client for JSON APIs that wrap every payload in a single-field
//! envelope: request bodies are `{"data": <payload>}`, success responses
//! are `{"data": <payload>}`, and error responses are
//! `{"data": {"messages": ["..."]}}`.
//!
//! Every call returns a two-channel outcome. The outer [`Result`] carries
//! transport failures (network, timeout, cancellation); the inner
//! [`ApiResult`] is the recovered application outcome: the decoded payload
//! on 2xx, a normalized [`ErrorResponse`] on anything else. HTTP-status and
//! body-decode failures never surface as errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use envelope_client::{ApiClient, Result};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Widget {
//!     name: String,
//!     count: u32,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ApiClient::new();
//!
//!     match client.get::<Widget>("https://api.example.com/widgets/1").await? {
//!         Ok(widget) => println!("got {}", widget.name),
//!         Err(err) => eprintln!("server rejected the request: {}", err),
//!     }
//!
//!     let widget = Widget { name: "gear".into(), count: 7 };
//!     if let Err(message) = client.post("https://api.example.com/widgets", &widget).await? {
//!         eprintln!("{}", message);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod transport;

mod response;

// Re-exports for ergonomic usage
pub use client::{ApiClient, ApiClientBuilder, RequestOptions};
pub use error::{Error, Result};
pub use models::{ApiResult, Envelope, ErrorEnvelope, ErrorMessages, ErrorResponse};
pub use query::QueryParams;
pub use transport::{DefaultClientFactory, HttpClient, HttpClientBuilder, HttpClientFactory};
