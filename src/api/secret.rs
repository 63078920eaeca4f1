//
//  vela-sdk
//  api/secret.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Secret API operations.
//!
//! Secrets are addressed by four segments:
//!
//! | Segment | Values |
//! |---------|--------|
//! | `engine` | `native`, `vault` |
//! | `kind` | `org`, `repo`, `shared` |
//! | `org` | Organization name |
//! | `name` | Repo name for `repo`, team name for `shared`, `*` for `org` |
//!
//! giving `/api/v1/secrets/{engine}/{kind}/{org}/{name}[/{secret}]`.

use reqwest::Method;

use super::client::{Client, NO_BODY};
use super::common::{add_options, ListOptions, Response, Result, VelaError};
use crate::types::Secret;

/// Operations on secrets.
#[derive(Debug, Clone, Copy)]
pub struct SecretService<'a> {
    client: &'a Client,
}

impl<'a> SecretService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the named secret.
    pub async fn get(
        &self,
        engine: &str,
        kind: &str,
        org: &str,
        name: &str,
        secret: &str,
    ) -> Result<(Secret, Response)> {
        let path = format!("/api/v1/secrets/{}/{}/{}/{}/{}", engine, kind, org, name, secret);
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Returns a page of secrets for the org, repo or team.
    pub async fn get_all(
        &self,
        engine: &str,
        kind: &str,
        org: &str,
        name: &str,
        opts: Option<&ListOptions>,
    ) -> Result<(Vec<Secret>, Response)> {
        let path = add_options(&format!("/api/v1/secrets/{}/{}/{}/{}", engine, kind, org, name), opts)?;
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Creates a secret.
    pub async fn add(
        &self,
        engine: &str,
        kind: &str,
        org: &str,
        name: &str,
        target: &Secret,
    ) -> Result<(Secret, Response)> {
        let path = format!("/api/v1/secrets/{}/{}/{}/{}", engine, kind, org, name);
        self.client.call(Method::POST, &path, Some(target)).await
    }

    /// Modifies the secret addressed by `target.name`.
    ///
    /// Fails with [`VelaError::MissingField`] when `target.name` is unset.
    pub async fn update(
        &self,
        engine: &str,
        kind: &str,
        org: &str,
        name: &str,
        target: &Secret,
    ) -> Result<(Secret, Response)> {
        let secret = target.name.as_deref().ok_or(VelaError::MissingField("name"))?;
        let path = format!("/api/v1/secrets/{}/{}/{}/{}/{}", engine, kind, org, name, secret);
        self.client.call(Method::PUT, &path, Some(target)).await
    }

    /// Deletes the secret, returning the server's confirmation message.
    pub async fn remove(
        &self,
        engine: &str,
        kind: &str,
        org: &str,
        name: &str,
        secret: &str,
    ) -> Result<(String, Response)> {
        let path = format!("/api/v1/secrets/{}/{}/{}/{}/{}", engine, kind, org, name, secret);
        self.client.call(Method::DELETE, &path, NO_BODY).await
    }
}
