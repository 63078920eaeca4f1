//
//  vela-sdk
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Vela API
//!
//! This module provides the core HTTP client shared by every resource
//! service. It handles URL construction, authentication and
//! request/response serialization.
//!
//! ## Features
//!
//! - Base URL and path joining with exactly one separating slash
//! - Authentication header injection (bearer token or basic)
//! - JSON serialization/deserialization
//! - Structured decoding of the server's error payload
//! - Custom User-Agent header
//!
//! ## Request Flow
//!
//! ```text
//! call(method, path, body)
//!   -> new_request          (URL + JSON body + headers)
//!   -> add_authentication   (Authorization header)
//!   -> send                 (one round trip, no retries)
//!   -> decode               (T on 2xx, VelaError otherwise)
//! ```

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::authorization::AuthorizationService;
use super::build::BuildService;
use super::common::{decode_api_error, parse_url_strict, Response, Result, VelaError};
use super::log::LogService;
use super::repo::RepoService;
use super::secret::SecretService;
use super::step::StepService;
use super::svc::SvcService;
use crate::auth::{AuthCredential, AuthenticationService};
use crate::config::Config;

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("vela-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Placeholder body for requests that do not send one.
pub(crate) const NO_BODY: Option<&()> = None;

/// The HTTP client for the Vela API.
///
/// A `Client` owns the base URL, the underlying `reqwest::Client`, the
/// user agent and the optional credentials. Resource services borrow it:
///
/// ```rust,no_run
/// use vela_sdk::api::Client;
///
/// # async fn example() -> vela_sdk::api::common::Result<()> {
/// let mut client = Client::new("https://vela.example.com", None)?;
/// client.authentication().set_token_auth("superSecretToken");
///
/// let (build, response) = client.build().get("github", "octocat", 1).await?;
/// println!("build #{:?} -> {}", build.number, response.status());
/// # Ok(())
/// # }
/// ```
///
/// # Concurrency
///
/// The client is `Send + Sync`; share it by reference (or in an `Arc`) to
/// issue calls concurrently. Credentials can only be changed through
/// `&mut Client`, so they cannot change while calls are in flight.
#[derive(Debug, Clone)]
pub struct Client {
    /// The underlying HTTP client
    http: reqwest::Client,
    /// Address of the Vela server, e.g. `https://vela.example.com`
    base_url: Url,
    /// Value of the `User-Agent` header
    user_agent: String,
    /// Optional authentication credentials
    pub(crate) auth: Option<AuthCredential>,
}

impl Client {
    /// Creates a client for the Vela server at `address`.
    ///
    /// # Parameters
    ///
    /// * `address` - Absolute `http` or `https` URL of the server
    /// * `http` - Optional preconfigured `reqwest::Client` (timeouts, proxies,
    ///   TLS roots). A default client is built when `None`.
    ///
    /// # Errors
    ///
    /// - [`VelaError::Config`] if `address` is empty
    /// - [`VelaError::InvalidUrl`] if `address` is not an absolute http(s) URL
    pub fn new(address: &str, http: Option<reqwest::Client>) -> Result<Self> {
        if address.is_empty() {
            return Err(VelaError::Config("Vela server address must not be empty".to_string()));
        }

        let base_url = parse_url_strict(address)?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(VelaError::InvalidUrl {
                url: address.to_string(),
                reason: "address must be an absolute http(s) URL".to_string(),
            });
        }

        let http = match http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .user_agent(DEFAULT_USER_AGENT)
                .build()
                .map_err(|e| VelaError::Config(e.to_string()))?,
        };

        Ok(Self {
            http,
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            auth: None,
        })
    }

    /// Creates a client from a loaded [`Config`].
    ///
    /// The configured user agent and timeout are applied to the underlying
    /// HTTP client, and the configured credentials (token first, then
    /// username/password) are attached.
    ///
    /// # Errors
    ///
    /// Same as [`Client::new`]; a config without `addr` yields
    /// [`VelaError::Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let mut builder = reqwest::Client::builder().user_agent(user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| VelaError::Config(e.to_string()))?;

        let mut client = Self::new(config.addr.as_deref().unwrap_or_default(), Some(http))?
            .with_user_agent(user_agent);
        client.auth = config.credential();
        Ok(client)
    }

    /// Sets the authentication credentials for this client.
    ///
    /// Builder form of [`AuthenticationService::set_token_auth`] and
    /// [`AuthenticationService::set_basic_auth`].
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Overrides the `User-Agent` header sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The server address this client was created with.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The `User-Agent` header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Builds, in absolute form, the URL for a path relative to the base URL.
    ///
    /// The base URL and `path` are joined with exactly one `/`, whether or
    /// not `path` starts with one. A path prefix on the base URL is kept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vela_sdk::api::Client;
    ///
    /// let client = Client::new("http://localhost:8080", None)?;
    /// assert_eq!(client.build_url_for_request("test")?, "http://localhost:8080/test");
    /// assert_eq!(client.build_url_for_request("/test")?, "http://localhost:8080/test");
    /// assert_eq!(client.build_url_for_request("test/")?, "http://localhost:8080/test/");
    /// # Ok::<(), vela_sdk::api::common::VelaError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VelaError::InvalidUrl`] if the joined URL does not parse,
    /// including malformed percent escapes.
    pub fn build_url_for_request(&self, path: &str) -> Result<String> {
        Ok(self.request_url(path)?.to_string())
    }

    fn request_url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let raw = format!("{}/{}", base, path.trim_start_matches('/'));
        parse_url_strict(&raw)
    }

    /// Creates an unsent request for `path`.
    ///
    /// The body, when present, is serialized as JSON. `Content-Type:
    /// application/json` and `User-Agent` are always set. Authentication is
    /// not attached here; see [`Client::add_authentication`].
    ///
    /// # Errors
    ///
    /// - [`VelaError::InvalidUrl`] if the URL cannot be built
    /// - [`VelaError::Serialization`] if the body cannot be serialized
    pub fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.request_url(path)?;

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, self.user_agent.as_str());

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(VelaError::Serialization)?;
            builder = builder.body(bytes);
        }

        Ok(builder.build()?)
    }

    /// Attaches the configured credentials to `request`.
    ///
    /// Requests are left untouched when no credentials are configured.
    pub fn add_authentication(&self, request: &mut Request) -> Result<()> {
        if let Some(auth) = &self.auth {
            auth.apply_to_request(request)?;
        }
        Ok(())
    }

    /// Sends a request and decodes the JSON response into `T`.
    ///
    /// This is the single transport used by every resource service. It
    /// performs exactly one round trip; nothing is retried.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type to deserialize the response JSON into
    /// * `B` - The type of the request body
    ///
    /// # Returns
    ///
    /// `Ok((value, response))` on a 2xx status. An empty 2xx body decodes as
    /// JSON `null`, so `()` and `Option<_>` destinations accept it.
    ///
    /// # Errors
    ///
    /// - Any error from [`Client::new_request`] or [`Client::add_authentication`]
    /// - [`VelaError::Network`] if the request could not be sent
    /// - [`VelaError::Api`] for a non-2xx status with an error payload
    /// - [`VelaError::Status`] for a non-2xx status without one
    /// - [`VelaError::Decode`] if a 2xx body does not match `T`
    /// - [`VelaError::Body`] if the body could not be read after the status arrived
    pub async fn call<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(T, Response)>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.new_request(method, path, body)?;
        self.add_authentication(&mut request)?;

        tracing::debug!("{} {}", request.method(), request.url());

        let http_response = self.http.execute(request).await.map_err(|e| {
            tracing::debug!("Request failed: {}", e);
            VelaError::Network(e)
        })?;

        let response = Response::from_http(&http_response);
        let body = match http_response.bytes().await {
            Ok(body) => body,
            Err(source) => {
                tracing::debug!("Reading body of {} ({}) failed: {}", response.url(), response.status(), source);
                return Err(VelaError::Body { response, source });
            }
        };

        tracing::debug!("{} returned {}", response.url(), response.status());

        if !response.is_success() {
            return Err(decode_api_error(response, &body));
        }

        let raw: &[u8] = if body.is_empty() { b"null" } else { &body };
        match serde_json::from_slice(raw) {
            Ok(value) => Ok((value, response)),
            Err(source) => Err(VelaError::Decode { response, source }),
        }
    }

    /// Credential management for this client.
    pub fn authentication(&mut self) -> AuthenticationService<'_> {
        AuthenticationService::new(self)
    }

    /// Login operations.
    pub fn authorization(&self) -> AuthorizationService<'_> {
        AuthorizationService::new(self)
    }

    /// Build operations.
    pub fn build(&self) -> BuildService<'_> {
        BuildService::new(self)
    }

    /// Step and service log operations.
    pub fn log(&self) -> LogService<'_> {
        LogService::new(self)
    }

    /// Repository operations.
    pub fn repo(&self) -> RepoService<'_> {
        RepoService::new(self)
    }

    /// Secret operations.
    pub fn secret(&self) -> SecretService<'_> {
        SecretService::new(self)
    }

    /// Step operations.
    pub fn step(&self) -> StepService<'_> {
        StepService::new(self)
    }

    /// Build service (sidecar container) operations.
    pub fn svc(&self) -> SvcService<'_> {
        SvcService::new(self)
    }
}
