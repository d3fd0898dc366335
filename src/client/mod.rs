// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared API client with the authorization interceptor chain.
//!
//! Every API call goes through [`ApiClient::execute`]:
//! - Outgoing: the request path picks the namespace, and that namespace's
//!   `Authorization` value replaces whatever header the request had.
//! - Incoming: anything but 401 passes through. A 401 from a non-auth
//!   endpoint that carried (or could have carried) a credential clears the
//!   namespace and sends the caller to its login surface.
//!
//! No retries or backoff happen here; network errors are returned as-is.

pub mod navigator;
pub mod routes;

pub use navigator::{Navigator, RecordingNavigator, TracingNavigator};
pub use routes::{classify_route, is_auth_endpoint};

use crate::error::{ClientError, Result, UnauthorizedOutcome};
use crate::models::Namespace;
use crate::session::SessionPolicy;
use crate::store::CredentialStore;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, Request, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Platform API client. Cheap to clone; clones share the store and navigator.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: SessionPolicy,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Create a client that only logs forced navigations.
    pub fn new(base_url: Url, store: CredentialStore) -> Self {
        Self::with_navigator(base_url, store, Arc::new(TracingNavigator))
    }

    pub fn with_navigator(
        base_url: Url,
        store: CredentialStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            session: SessionPolicy::new(store),
            navigator,
        }
    }

    pub fn session(&self) -> &SessionPolicy {
        &self.session
    }

    pub fn store(&self) -> &CredentialStore {
        self.session.store()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an API path (e.g. `admin/payments`) against the base URL.
    ///
    /// Absolute URLs are refused so credentials never leave the API host.
    pub fn url(&self, path: &str) -> Result<Url> {
        if Url::parse(path).is_ok() {
            return Err(ClientError::InvalidPath(path.to_string()));
        }
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ClientError::InvalidPath(format!("{path}: {e}")))
    }

    /// Start a request for an API path. Send it with [`ApiClient::execute`].
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        Ok(self.http.request(method, self.url(path)?))
    }

    // ─── Interceptors ────────────────────────────────────────────────────

    /// Attach the namespace's credential to `request`.
    ///
    /// Returns the namespace and whether a non-empty credential was attached.
    pub fn authorize(&self, request: &mut Request) -> (Namespace, bool) {
        let namespace = classify_route(request.url().path());
        let header = self.session.auth_header_for(namespace);

        let value = match HeaderValue::from_str(&header.authorization) {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(namespace = %namespace, "Stored token is not a valid header value");
                HeaderValue::from_static("")
            }
        };
        let attached = !value.is_empty();
        request.headers_mut().insert(AUTHORIZATION, value);

        (namespace, attached)
    }

    /// Decide what a 401 for `path` means, applying logout if needed.
    pub fn on_unauthorized(&self, path: &str, header_attached: bool) -> UnauthorizedOutcome {
        let namespace = classify_route(path);

        if is_auth_endpoint(path) {
            tracing::debug!(namespace = %namespace, path, "Auth endpoint rejected credentials");
            return UnauthorizedOutcome::AuthEndpoint;
        }

        let stored = self.store().get_token(namespace).is_some();
        if !header_attached && !stored {
            tracing::debug!(namespace = %namespace, path, "Anonymous request unauthorized");
            return UnauthorizedOutcome::Anonymous;
        }

        tracing::info!(namespace = %namespace, path, "Session rejected by server, logging out");
        self.store().clear(namespace);
        self.navigator.navigate(namespace.login_path());
        UnauthorizedOutcome::SessionInvalidated
    }

    /// Send a request through the interceptor chain.
    ///
    /// Non-401 responses are returned untouched, whatever their status.
    pub async fn execute(&self, mut request: Request) -> Result<Response> {
        let (namespace, attached) = self.authorize(&mut request);
        let path = request.url().path().to_string();

        let response = self.http.execute(request).await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let outcome = self.on_unauthorized(&path, attached);
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Unauthorized {
            namespace,
            path,
            outcome,
            body,
        })
    }

    // ─── JSON helpers ────────────────────────────────────────────────────

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::GET, path)?.build()?;
        let response = self.execute(request).await?;
        Self::check_response_json(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.json(body).build()?;
        let response = self.execute(request).await?;
        Self::check_response_json(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path)?.json(body).build()?;
        let response = self.execute(request).await?;
        Self::check_response_json(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = self.request(Method::DELETE, path)?.build()?;
        let response = self.execute(request).await?;
        Self::check_response(response).await
    }

    /// Check response status and return error if not successful.
    async fn check_response(response: Response) -> Result<()> {
        if response.status().is_success() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status { status, body })
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
