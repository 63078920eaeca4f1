//
//  vela-sdk
//  api/step.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Step API operations.
//!
//! Steps live under `/api/v1/repos/{org}/{repo}/builds/{build}/steps`.

use reqwest::Method;

use super::client::{Client, NO_BODY};
use super::common::{add_options, ListOptions, Response, Result, VelaError};
use crate::types::Step;

/// Operations on the steps of a build.
#[derive(Debug, Clone, Copy)]
pub struct StepService<'a> {
    client: &'a Client,
}

impl<'a> StepService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the step with the given number.
    pub async fn get(&self, org: &str, repo: &str, build: i32, number: i32) -> Result<(Step, Response)> {
        let path = format!("/api/v1/repos/{}/{}/builds/{}/steps/{}", org, repo, build, number);
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Returns a page of steps for the build.
    pub async fn get_all(
        &self,
        org: &str,
        repo: &str,
        build: i32,
        opts: Option<&ListOptions>,
    ) -> Result<(Vec<Step>, Response)> {
        let path = add_options(&format!("/api/v1/repos/{}/{}/builds/{}/steps", org, repo, build), opts)?;
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Creates a step with the provided details.
    pub async fn add(&self, org: &str, repo: &str, build: i32, target: &Step) -> Result<(Step, Response)> {
        let path = format!("/api/v1/repos/{}/{}/builds/{}/steps", org, repo, build);
        self.client.call(Method::POST, &path, Some(target)).await
    }

    /// Modifies the step addressed by `target.number`.
    ///
    /// Fails with [`VelaError::MissingField`] when `target.number` is unset.
    pub async fn update(&self, org: &str, repo: &str, build: i32, target: &Step) -> Result<(Step, Response)> {
        let number = target.number.ok_or(VelaError::MissingField("number"))?;
        let path = format!("/api/v1/repos/{}/{}/builds/{}/steps/{}", org, repo, build, number);
        self.client.call(Method::PUT, &path, Some(target)).await
    }

    /// Deletes the step, returning the server's confirmation message.
    pub async fn remove(&self, org: &str, repo: &str, build: i32, number: i32) -> Result<(String, Response)> {
        let path = format!("/api/v1/repos/{}/{}/builds/{}/steps/{}", org, repo, build, number);
        self.client.call(Method::DELETE, &path, NO_BODY).await
    }
}
