//! Client entry point and the request pipeline.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config;
use crate::error::{Error, Result};
use crate::models::{ApiResult, Envelope};
use crate::query::QueryParams;
use crate::response::process_response;
use crate::transport::{headers, DefaultClientFactory, HttpClient, HttpClientFactory};

/// Per-call options for the canonical operations.
///
/// Defaults are an empty query mapping and no cancellation token, so the
/// convenience entry points behave identically to passing
/// `RequestOptions::default()`. Cancellation is strictly additive and never
/// changes success/failure semantics when absent.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query parameters appended to the request URI in insertion order.
    pub query: QueryParams,
    /// Cooperative cancellation, checked at the dispatch and the body read.
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    /// Create options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query parameters.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Set the cancellation token.
    #[must_use]
    pub fn cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// Typed client for envelope-style JSON APIs.
///
/// Issues GET and POST requests, wraps outgoing payloads in the
/// `{"data": ...}` envelope, and classifies every response into an
/// [`ApiResult`]: the decoded payload on 2xx, a normalized
/// [`ErrorResponse`](crate::ErrorResponse) otherwise. Transport failures
/// (network, timeout, cancellation) surface through the outer
/// [`Result`] instead.
///
/// The client holds no state beyond a transport-factory reference and its
/// logical client name; it is safe to share across arbitrarily many
/// concurrent calls.
///
/// # Examples
///
/// ```rust,no_run
/// use envelope_client::{ApiClient, QueryParams, RequestOptions, Result};
/// use serde::Deserialize;
///
/// #[derive(Debug, Default, Deserialize)]
/// struct Widget {
///     name: String,
/// }
///
/// # async fn example() -> Result<()> {
/// let client = ApiClient::new();
///
/// let opts = RequestOptions::new().query(QueryParams::new().with("page", "2"));
/// match client.get_opts::<Vec<Widget>>("https://api.example.com/widgets", opts).await? {
///     Ok(widgets) => println!("{} widgets", widgets.len()),
///     Err(err) => eprintln!("server said: {}", err),
/// }
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    factory: Arc<dyn HttpClientFactory>,
    client_name: String,
}

impl ApiClient {
    /// Create a client with the default transport factory.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for configuring the client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Issue a GET request and decode the enveloped response.
    pub async fn get<T>(&self, url: &str) -> Result<ApiResult<T>>
    where
        T: DeserializeOwned + Default,
    {
        self.get_opts(url, RequestOptions::default()).await
    }

    /// Issue a GET request with explicit per-call options.
    ///
    /// The final URI is the base URL with the query parameters appended in
    /// insertion order. The call resolves at response headers; the body is
    /// read lazily during classification.
    pub async fn get_opts<T>(&self, url: &str, opts: RequestOptions) -> Result<ApiResult<T>>
    where
        T: DeserializeOwned + Default,
    {
        let url = opts.query.append_to(url);
        let http = self.factory.create_client(&self.client_name);

        debug!(url = url.as_str(), "Dispatching GET");

        let request = http.inner().get(&url).headers(headers::base_headers());
        let response = dispatch(request, opts.cancel.as_ref()).await?;
        process_response(response, opts.cancel.as_ref()).await
    }

    /// POST a payload, discarding the response payload.
    ///
    /// Lossy convenience over [`post_with_result`](Self::post_with_result):
    /// success collapses to `()` and a failure to the error's string
    /// representation. Succeeds exactly when the typed variant succeeds.
    pub async fn post<T>(&self, url: &str, data: &T) -> Result<std::result::Result<(), String>>
    where
        T: Serialize,
    {
        self.post_opts(url, data, RequestOptions::default()).await
    }

    /// POST a payload with explicit per-call options, discarding the
    /// response payload.
    pub async fn post_opts<T>(
        &self,
        url: &str,
        data: &T,
        opts: RequestOptions,
    ) -> Result<std::result::Result<(), String>>
    where
        T: Serialize,
    {
        let outcome = self.post_with_result_opts::<T, ()>(url, data, opts).await?;
        Ok(outcome.map_err(|e| e.to_string()))
    }

    /// POST a payload and decode a response payload of the same type.
    pub async fn post_returning<T>(&self, url: &str, data: &T) -> Result<ApiResult<T>>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        self.post_with_result_opts(url, data, RequestOptions::default())
            .await
    }

    /// POST a payload and decode a typed response payload.
    pub async fn post_with_result<T, TR>(&self, url: &str, data: &T) -> Result<ApiResult<TR>>
    where
        T: Serialize,
        TR: DeserializeOwned + Default,
    {
        self.post_with_result_opts(url, data, RequestOptions::default())
            .await
    }

    /// POST a payload with explicit per-call options and decode a typed
    /// response payload.
    ///
    /// The payload is wrapped in the `{"data": ...}` envelope and sent as
    /// JSON. This is the canonical POST; the other POST entry points
    /// delegate to it.
    pub async fn post_with_result_opts<T, TR>(
        &self,
        url: &str,
        data: &T,
        opts: RequestOptions,
    ) -> Result<ApiResult<TR>>
    where
        T: Serialize,
        TR: DeserializeOwned + Default,
    {
        let url = opts.query.append_to(url);
        let body = serde_json::to_vec(&Envelope::new(data))?;
        let http = self.factory.create_client(&self.client_name);

        debug!(url = url.as_str(), bytes = body.len(), "Dispatching POST");

        let request = http
            .inner()
            .post(&url)
            .headers(headers::json_body_headers())
            .body(body);
        let response = dispatch(request, opts.cancel.as_ref()).await?;
        process_response(response, opts.cancel.as_ref()).await
    }

    /// The logical client name handed to the transport factory.
    pub fn client_name(&self) -> &str {
        &self.client_name
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("client_name", &self.client_name)
            .finish()
    }
}

/// Send a built request, resolving as soon as response headers arrive.
///
/// The dispatch is the first suspension point of a call. When a
/// cancellation token is present it is raced against the send; losing the
/// race drops the in-flight request and yields [`Error::Cancelled`].
async fn dispatch(
    request: reqwest::RequestBuilder,
    cancel: Option<&CancellationToken>,
) -> Result<reqwest::Response> {
    match cancel {
        Some(token) => tokio::select! {
            _ = token.cancelled() => Err(Error::Cancelled),
            res = request.send() => res.map_err(Error::from_transport),
        },
        None => request.send().await.map_err(Error::from_transport),
    }
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    factory: Option<Arc<dyn HttpClientFactory>>,
    client_name: Option<String>,
    reqwest_client: Option<reqwest::Client>,
}

impl ApiClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            factory: None,
            client_name: None,
            reqwest_client: None,
        }
    }

    /// Set a custom transport factory.
    pub fn factory(mut self, factory: Arc<dyn HttpClientFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Set the logical client name handed to the factory.
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Use a custom reqwest client through the default factory.
    ///
    /// Ignored when a custom factory is set; the factory owns client
    /// configuration in that case.
    pub fn reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.reqwest_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiClient {
        let factory: Arc<dyn HttpClientFactory> = match (self.factory, self.reqwest_client) {
            (Some(factory), _) => factory,
            (None, Some(client)) => Arc::new(DefaultClientFactory::with_client(
                HttpClient::from_reqwest(client),
            )),
            (None, None) => Arc::new(DefaultClientFactory::new()),
        };

        ApiClient {
            factory,
            client_name: self
                .client_name
                .unwrap_or_else(|| config::DEFAULT_CLIENT_NAME.to_string()),
        }
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_options_defaults() {
        let opts = RequestOptions::default();
        assert!(opts.query.is_empty());
        assert!(opts.cancel.is_none());
    }

    #[test]
    fn test_builder_default_client_name() {
        let client = ApiClient::builder().build();
        assert_eq!(client.client_name(), config::DEFAULT_CLIENT_NAME);
    }

    #[test]
    fn test_builder_custom_client_name() {
        let client = ApiClient::builder().client_name("billing").build();
        assert_eq!(client.client_name(), "billing");
    }

    #[test]
    fn test_custom_factory_receives_name() {
        use std::sync::atomic::{AtomicBool, Ordering};

        struct RecordingFactory {
            called: AtomicBool,
        }

        impl HttpClientFactory for RecordingFactory {
            fn create_client(&self, name: &str) -> HttpClient {
                assert_eq!(name, "inventory");
                self.called.store(true, Ordering::SeqCst);
                HttpClient::new()
            }
        }

        let factory = Arc::new(RecordingFactory {
            called: AtomicBool::new(false),
        });
        let client = ApiClient::builder()
            .factory(Arc::clone(&factory) as Arc<dyn HttpClientFactory>)
            .client_name("inventory")
            .build();

        client.factory.create_client(client.client_name());
        assert!(factory.called.load(Ordering::SeqCst));
    }
}
