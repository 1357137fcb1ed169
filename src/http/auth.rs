use std::sync::Arc;

use http::Method;
use http::header::{AUTHORIZATION, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http::client::ApiClient;
use crate::session::store::SessionStore;

/// Wraps [`ApiClient`], injecting the session's bearer token into every
/// outgoing request.
///
/// Caller-supplied headers are preserved: the `Authorization` header is
/// only merged in when the caller did not set one and the session holds a
/// non-empty token. Without a token the request goes out unauthenticated
/// and the server rejects it as needed.
#[derive(Clone)]
pub struct AuthApiClient {
    inner: ApiClient,
    session: Arc<SessionStore>,
}

impl AuthApiClient {
    /// Creates a new `AuthApiClient` over the given client and session.
    pub fn new(inner: ApiClient, session: Arc<SessionStore>) -> Self {
        Self { inner, session }
    }

    /// The wrapped unauthenticated client.
    pub fn api(&self) -> &ApiClient {
        &self.inner
    }

    /// Starts a request builder for the given method and path.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.inner.request(method, path)
    }

    /// Issues an authenticated GET request and decodes the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.request(Method::GET, path)).await
    }

    /// Issues an authenticated POST request with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    /// Finalizes a builder, merges the bearer token, and dispatches.
    pub async fn execute<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T> {
        let mut request = builder.build()?;

        if !request.headers().contains_key(AUTHORIZATION) {
            if let Some(token) = self.session.token().await {
                if !token.is_empty() {
                    match HeaderValue::from_str(&format!("Bearer {}", token)) {
                        Ok(value) => {
                            request.headers_mut().insert(AUTHORIZATION, value);
                        }
                        Err(_) => {
                            // malformed token: send unauthenticated rather than fail
                            tracing::warn!("⚠️ Held token is not a valid header value");
                        }
                    }
                }
            }
        }

        self.inner.dispatch(request).await
    }
}
