use std::time::Duration;

use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ApiError, Result};

/// A thin wrapper over `reqwest` that resolves paths against the configured
/// API base URL.
///
/// Attaches no authentication and performs no retries; callers own the
/// request options. See [`AuthApiClient`](crate::http::auth::AuthApiClient)
/// for the bearer-injecting variant.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new `ApiClient` from the configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The client configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `ApiClient`.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Resolves a request path against the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Starts a request builder for the given method and path.
    ///
    /// Caller-supplied options (headers, query, body) pass through to the
    /// wire unmodified.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Issues a GET request and decodes the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.request(Method::GET, path)).await
    }

    /// Issues a POST request with a JSON body and decodes the response.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    /// Finalizes a builder and dispatches it.
    pub async fn execute<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T> {
        let request = builder.build()?;
        self.dispatch(request).await
    }

    /// Dispatches a built request, mapping non-2xx responses to
    /// [`ApiError::Api`] and decoding 2xx JSON bodies into `T`.
    pub(crate) async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
    ) -> Result<T> {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!("📡 {} {}", method, url.path());

        let response = self.http.execute(request).await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let message = extract_error_message(response).await;
            tracing::debug!("❌ {} {} failed with {}: {}", method, url.path(), status, message);
            Err(ApiError::Api { status, message })
        }
    }
}

/// Pulls the error message out of a failed response body.
///
/// The backend reports errors as `{"message": ...}` or `{"error": ...}`;
/// anything else falls back to the status line.
async fn extract_error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(message) = value
            .get("message")
            .or_else(|| value.get("error"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}
