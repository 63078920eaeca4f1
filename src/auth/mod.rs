//
//  vela-sdk
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module holds the credentials a [`Client`](crate::api::Client) attaches
//! to every request, and the [`AuthenticationService`] used to change them.
//!
//! ## Supported Authentication Methods
//!
//! - **Bearer Token**: The token returned by `POST /login` or a personal
//!   token issued by the server. Sent as `Authorization: Bearer <token>`.
//! - **Basic Authentication**: Username/password, sent as HTTP Basic.
//!
//! The two modes are mutually exclusive; setting one replaces the other.
//! Tokens are opaque to the client: there is no expiry tracking or refresh.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vela_sdk::api::Client;
//!
//! let mut client = Client::new("https://vela.example.com", None)?;
//! client.authentication().set_token_auth("superSecretToken");
//! assert!(client.authentication().has_auth());
//! # Ok::<(), vela_sdk::api::common::VelaError>(())
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;

use crate::api::common::Result;
use crate::api::Client;

/// Credentials attached to outgoing requests.
///
/// # Variants
///
/// - `Token`: Bearer token authentication
/// - `Basic`: HTTP Basic authentication with username and password
///
/// # Example
///
/// ```rust
/// use vela_sdk::auth::AuthCredential;
///
/// let token = AuthCredential::bearer("superSecretToken");
/// let basic = AuthCredential::basic("octocat", "hunter2");
/// assert!(matches!(token, AuthCredential::Token { .. }));
/// assert!(matches!(basic, AuthCredential::Basic { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// Bearer token authentication.
    Token {
        /// The opaque token string.
        token: String,
    },
    /// Basic HTTP authentication with username and password.
    Basic {
        /// The username for authentication.
        username: String,
        /// The password for authentication.
        password: String,
    },
}

impl AuthCredential {
    /// Creates a bearer token credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Token {
            token: token.into(),
        }
    }

    /// Creates a basic authentication credential.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the `Authorization` header value for this credential.
    ///
    /// The value is marked sensitive so it is redacted from `Debug` output.
    ///
    /// # Errors
    ///
    /// Returns [`VelaError::InvalidHeader`](crate::api::common::VelaError::InvalidHeader)
    /// if the token contains characters that are not allowed in a header.
    pub fn header_value(&self) -> Result<HeaderValue> {
        let raw = match self {
            Self::Token { token } => format!("Bearer {}", token),
            Self::Basic { username, password } => {
                format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
            }
        };

        let mut value = HeaderValue::from_str(&raw)?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Applies the credential to a request, replacing any existing
    /// `Authorization` header.
    pub fn apply_to_request(&self, request: &mut Request) -> Result<()> {
        let value = self.header_value()?;
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// Manages the credentials of a [`Client`].
///
/// Obtained from [`Client::authentication`], which borrows the client
/// mutably: credentials are meant to be set during setup, before the client
/// is shared for concurrent calls.
#[derive(Debug)]
pub struct AuthenticationService<'a> {
    client: &'a mut Client,
}

impl<'a> AuthenticationService<'a> {
    pub(crate) fn new(client: &'a mut Client) -> Self {
        Self { client }
    }

    /// Authenticates subsequent requests with a bearer token.
    ///
    /// Replaces any previously configured credentials.
    pub fn set_token_auth(&mut self, token: impl Into<String>) {
        self.client.auth = Some(AuthCredential::bearer(token));
    }

    /// Authenticates subsequent requests with HTTP Basic credentials.
    ///
    /// Replaces any previously configured credentials.
    pub fn set_basic_auth(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.client.auth = Some(AuthCredential::basic(username, password));
    }

    /// Removes the configured credentials; later requests are sent unauthenticated.
    pub fn clear(&mut self) {
        self.client.auth = None;
    }

    /// Whether any credentials are configured.
    pub fn has_auth(&self) -> bool {
        self.client.auth.is_some()
    }

    /// The configured credentials, if any.
    pub fn credential(&self) -> Option<&AuthCredential> {
        self.client.auth.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_value() {
        let value = AuthCredential::bearer("foobar").header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer foobar");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_basic_header_value() {
        let value = AuthCredential::basic("octocat", "hunter2").header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), "Basic b2N0b2NhdDpodW50ZXIy");
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let result = AuthCredential::bearer("bad\ntoken").header_value();
        assert!(result.is_err());
    }

    #[test]
    fn test_later_credentials_overwrite_earlier() {
        let mut client = Client::new("http://localhost:8080", None).unwrap();

        client.authentication().set_basic_auth("octocat", "hunter2");
        client.authentication().set_token_auth("foobar");
        assert_eq!(client.authentication().credential(), Some(&AuthCredential::bearer("foobar")));

        client.authentication().clear();
        assert!(!client.authentication().has_auth());
    }
}
