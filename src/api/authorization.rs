//
//  vela-sdk
//  api/authorization.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Login operations.

use reqwest::Method;

use super::client::Client;
use super::common::{Response, Result};
use crate::types::Login;

/// Exchanges user credentials for a bearer token.
///
/// # Example
///
/// ```rust,no_run
/// use vela_sdk::api::Client;
/// use vela_sdk::types::Login;
///
/// # async fn example() -> vela_sdk::api::common::Result<()> {
/// let mut client = Client::new("https://vela.example.com", None)?;
/// let login = Login {
///     username: Some("octocat".to_string()),
///     password: Some("hunter2".to_string()),
///     ..Default::default()
/// };
///
/// let (login, _) = client.authorization().login(&login).await?;
/// if let Some(token) = login.token {
///     client.authentication().set_token_auth(token);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationService<'a> {
    client: &'a Client,
}

impl<'a> AuthorizationService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Sends the credentials to `POST /login`.
    ///
    /// The returned token is not stored on the client; pass it to
    /// `AuthenticationService::set_token_auth` to use it.
    pub async fn login(&self, target: &Login) -> Result<(Login, Response)> {
        self.client.call(Method::POST, "/login", Some(target)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::VelaError;
    use mockito::Matcher;
    use reqwest::StatusCode;

    #[tokio::test]
    async fn test_login() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/login")
            .match_body(Matcher::Json(serde_json::json!({"username": "octocat", "password": "hunter2"})))
            .with_status(200)
            .with_body(r#"{"username": "octocat", "token": "superSecretToken"}"#)
            .create_async()
            .await;

        let mut client = Client::new(&server.url(), None).unwrap();
        let target = Login {
            username: Some("octocat".to_string()),
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let (login, _) = client.authorization().login(&target).await.unwrap();

        assert_eq!(login.token.as_deref(), Some("superSecretToken"));
        assert!(login.password.is_none());
        mock.assert_async().await;

        client.authentication().set_token_auth(login.token.unwrap());
        assert!(client.authentication().has_auth());
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/login")
            .with_status(401)
            .with_body(r#"{"error":"unable to authenticate user"}"#)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let err = client.authorization().login(&Login::default()).await.unwrap_err();

        assert!(matches!(err, VelaError::Api { .. }));
        assert_eq!(err.response().unwrap().status(), StatusCode::UNAUTHORIZED);
    }
}
