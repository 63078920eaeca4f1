//
//  vela-sdk
//  api/svc.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build service API operations.
//!
//! Services (sidecar containers such as databases) live under
//! `/api/v1/repos/{org}/{repo}/builds/{build}/services`.

use reqwest::Method;

use super::client::{Client, NO_BODY};
use super::common::{add_options, ListOptions, Response, Result, VelaError};
use crate::types::Service;

/// Operations on the services of a build.
#[derive(Debug, Clone, Copy)]
pub struct SvcService<'a> {
    client: &'a Client,
}

impl<'a> SvcService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the service with the given number.
    pub async fn get(&self, org: &str, repo: &str, build: i32, number: i32) -> Result<(Service, Response)> {
        let path = format!("/api/v1/repos/{}/{}/builds/{}/services/{}", org, repo, build, number);
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Returns a page of services for the build.
    pub async fn get_all(
        &self,
        org: &str,
        repo: &str,
        build: i32,
        opts: Option<&ListOptions>,
    ) -> Result<(Vec<Service>, Response)> {
        let path = add_options(&format!("/api/v1/repos/{}/{}/builds/{}/services", org, repo, build), opts)?;
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Creates a service with the provided details.
    pub async fn add(&self, org: &str, repo: &str, build: i32, target: &Service) -> Result<(Service, Response)> {
        let path = format!("/api/v1/repos/{}/{}/builds/{}/services", org, repo, build);
        self.client.call(Method::POST, &path, Some(target)).await
    }

    /// Modifies the service addressed by `target.number`.
    pub async fn update(&self, org: &str, repo: &str, build: i32, target: &Service) -> Result<(Service, Response)> {
        let number = target.number.ok_or(VelaError::MissingField("number"))?;
        let path = format!("/api/v1/repos/{}/{}/builds/{}/services/{}", org, repo, build, number);
        self.client.call(Method::PUT, &path, Some(target)).await
    }

    /// Deletes the service, returning the server's confirmation message.
    pub async fn remove(&self, org: &str, repo: &str, build: i32, number: i32) -> Result<(String, Response)> {
        let path = format!("/api/v1/repos/{}/{}/builds/{}/services/{}", org, repo, build, number);
        self.client.call(Method::DELETE, &path, NO_BODY).await
    }
}
