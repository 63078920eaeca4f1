//
//  vela-sdk
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Vela client
//!
//! This module provides the types shared by every resource service: the
//! unified error type, the raw response metadata returned next to every
//! decoded value, and the decoder for the server's error payload.
//!
//! # Overview
//!
//! - [`VelaError`] - Unified error type for all API operations
//! - [`Response`] - Status, headers and URL of the HTTP response
//! - [`Result`] - Crate-wide result alias defaulting to [`VelaError`]
//!
//! # Example
//!
//! ```rust
//! use vela_sdk::api::common::VelaError;
//!
//! fn handle_result<T>(result: Result<T, VelaError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(VelaError::Api { message, .. }) => println!("Server said: {}", message),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use std::cell::Cell;

use reqwest::header::{HeaderMap, InvalidHeaderValue};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use url::{SyntaxViolation, Url};

mod options;

pub use options::*;

/// Result alias used throughout the crate.
pub type Result<T, E = VelaError> = std::result::Result<T, E>;

/// Unified error type for all Vela API operations.
///
/// # Variants
///
/// | Variant | Description | Network call made |
/// |---------|-------------|-------------------|
/// | `Config` | Client could not be configured | No |
/// | `InvalidUrl` | Base URL, path or option URL failed to parse | No |
/// | `Options` | Query options could not be encoded | No |
/// | `Serialization` | Request body could not be encoded as JSON | No |
/// | `InvalidHeader` | Credential contains characters illegal in a header | No |
/// | `MissingField` | An identifier needed to build the path is unset | No |
/// | `Network` | Connection failure, timeout, TLS error | Yes |
/// | `Api` | Non-2xx status with a decodable error payload | Yes |
/// | `Status` | Non-2xx status without a decodable error payload | Yes |
/// | `Decode` | 2xx status whose body did not match the expected type | Yes |
/// | `Body` | Response body could not be read after the status arrived | Yes |
///
/// # Notes
///
/// - `Api`, `Status`, `Decode` and `Body` carry the [`Response`], see [`VelaError::response`]
/// - The `Network` variant automatically converts from `reqwest::Error`
/// - Nothing is retried; every error reaches the caller as soon as it happens
#[derive(Error, Debug)]
pub enum VelaError {
    /// The client was constructed with unusable settings (e.g. an empty address).
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// A URL could not be parsed.
    ///
    /// `url` is the original, unmodified input so callers can recover it.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as supplied by the caller
        url: String,
        /// Why the parser rejected it
        reason: String,
    },

    /// Query options could not be encoded.
    ///
    /// Raised when the options value is not a struct or map, e.g. a bare integer.
    #[error("Unable to encode query options for '{url}': {source}")]
    Options {
        /// The URL as supplied by the caller, unchanged
        url: String,
        /// The underlying encoder error
        #[source]
        source: serde_urlencoded::ser::Error,
    },

    /// The request body could not be serialized to JSON.
    #[error("Unable to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A credential produced an invalid `Authorization` header value.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    /// A resource identifier required to build the request path is not set.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the request and explained why.
    #[error("API error ({}): {message}", .response.status())]
    Api {
        /// Metadata of the failed response
        response: Response,
        /// The `error` field of the server's payload
        message: String,
    },

    /// The server rejected the request without a readable error payload.
    #[error("Unexpected HTTP status {}", .response.status())]
    Status {
        /// Metadata of the failed response
        response: Response,
    },

    /// The response body could not be decoded into the expected type.
    #[error("Unable to decode response body: {source}")]
    Decode {
        /// Metadata of the response whose body failed to decode
        response: Response,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The status line arrived but reading the body failed.
    #[error("Unable to read response body ({}): {source}", .response.status())]
    Body {
        /// Metadata of the response whose body could not be read
        response: Response,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },
}

impl VelaError {
    /// Returns the HTTP response metadata when the error came back from the server.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use vela_sdk::api::Client;
    ///
    /// # async fn example() -> vela_sdk::api::common::Result<()> {
    /// let client = Client::new("https://vela.example.com", None)?;
    /// if let Err(err) = client.build().get("octocat", "hello-world", 1).await {
    ///     if let Some(response) = err.response() {
    ///         println!("status: {}", response.status());
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Api { response, .. }
            | Self::Status { response }
            | Self::Decode { response, .. }
            | Self::Body { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// Metadata of an HTTP response.
///
/// Returned alongside every decoded value so callers can inspect the status
/// code and headers (e.g. rate limiting information). The body has already
/// been consumed by the decoder.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
}

impl Response {
    /// Captures the metadata of a `reqwest` response before its body is consumed.
    pub(crate) fn from_http(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            url: response.url().clone(),
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The final URL of the request, after redirects.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Error payload returned by the Vela server on non-2xx responses.
///
/// The server writes `{"error": "..."}`; some proxies in front of it answer
/// with `{"message": "..."}`, which is accepted as well.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(alias = "message")]
    error: String,
}

/// Converts a non-success response into a [`VelaError`].
///
/// Returns [`VelaError::Api`] when the body holds a structured error payload,
/// [`VelaError::Status`] otherwise.
pub(crate) fn decode_api_error(response: Response, body: &[u8]) -> VelaError {
    match serde_json::from_slice::<ErrorPayload>(body) {
        Ok(payload) => VelaError::Api {
            response,
            message: payload.error,
        },
        Err(_) => VelaError::Status { response },
    }
}

/// Parses a URL, rejecting input the `url` crate would otherwise repair.
///
/// The WHATWG parser accepts malformed percent escapes such as `%^&` and only
/// reports them as syntax violations. Those are treated as hard errors here so
/// that paths like `!@#$%^&*()` fail before any request is sent.
pub(crate) fn parse_url_strict(raw: &str) -> Result<Url> {
    let violation: Cell<Option<SyntaxViolation>> = Cell::new(None);
    let record = |v: SyntaxViolation| {
        if matches!(v, SyntaxViolation::PercentDecode | SyntaxViolation::NullInFragment)
            && violation.get().is_none()
        {
            violation.set(Some(v));
        }
    };

    let url = Url::options()
        .syntax_violation_callback(Some(&record))
        .parse(raw)
        .map_err(|e| VelaError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

    if let Some(v) = violation.get() {
        return Err(VelaError::InvalidUrl {
            url: raw.to_string(),
            reason: v.description().to_string(),
        });
    }

    Ok(url)
}
