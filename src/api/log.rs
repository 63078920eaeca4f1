//
//  vela-sdk
//  api/log.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Log API operations.
//!
//! Logs belong to a single step or service:
//!
//! - `/api/v1/repos/{org}/{repo}/builds/{build}/steps/{step}/logs`
//! - `/api/v1/repos/{org}/{repo}/builds/{build}/services/{service}/logs`
//!
//! Every operation on a resource uses the same path; the HTTP method selects
//! the action. Use [`BuildService::get_logs`](super::build::BuildService::get_logs)
//! for the logs of a whole build.

use reqwest::Method;

use super::client::{Client, NO_BODY};
use super::common::{Response, Result};
use crate::types::Log;

/// Operations on step and service logs.
#[derive(Debug, Clone, Copy)]
pub struct LogService<'a> {
    client: &'a Client,
}

fn step_path(org: &str, repo: &str, build: i32, step: i32) -> String {
    format!("/api/v1/repos/{}/{}/builds/{}/steps/{}/logs", org, repo, build, step)
}

fn service_path(org: &str, repo: &str, build: i32, service: i32) -> String {
    format!("/api/v1/repos/{}/{}/builds/{}/services/{}/logs", org, repo, build, service)
}

impl<'a> LogService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the log of a step.
    pub async fn get_step(&self, org: &str, repo: &str, build: i32, step: i32) -> Result<(Log, Response)> {
        let path = step_path(org, repo, build, step);
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Creates the log of a step.
    pub async fn add_step(
        &self,
        org: &str,
        repo: &str,
        build: i32,
        step: i32,
        target: &Log,
    ) -> Result<(Log, Response)> {
        let path = step_path(org, repo, build, step);
        self.client.call(Method::POST, &path, Some(target)).await
    }

    /// Replaces the log of a step.
    pub async fn update_step(
        &self,
        org: &str,
        repo: &str,
        build: i32,
        step: i32,
        target: &Log,
    ) -> Result<(Log, Response)> {
        let path = step_path(org, repo, build, step);
        self.client.call(Method::PUT, &path, Some(target)).await
    }

    /// Deletes the log of a step.
    pub async fn remove_step(&self, org: &str, repo: &str, build: i32, step: i32) -> Result<(String, Response)> {
        let path = step_path(org, repo, build, step);
        self.client.call(Method::DELETE, &path, NO_BODY).await
    }

    /// Returns the log of a service.
    pub async fn get_service(&self, org: &str, repo: &str, build: i32, service: i32) -> Result<(Log, Response)> {
        let path = service_path(org, repo, build, service);
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Creates the log of a service.
    pub async fn add_service(
        &self,
        org: &str,
        repo: &str,
        build: i32,
        service: i32,
        target: &Log,
    ) -> Result<(Log, Response)> {
        let path = service_path(org, repo, build, service);
        self.client.call(Method::POST, &path, Some(target)).await
    }

    /// Replaces the log of a service.
    pub async fn update_service(
        &self,
        org: &str,
        repo: &str,
        build: i32,
        service: i32,
        target: &Log,
    ) -> Result<(Log, Response)> {
        let path = service_path(org, repo, build, service);
        self.client.call(Method::PUT, &path, Some(target)).await
    }

    /// Deletes the log of a service.
    pub async fn remove_service(
        &self,
        org: &str,
        repo: &str,
        build: i32,
        service: i32,
    ) -> Result<(String, Response)> {
        let path = service_path(org, repo, build, service);
        self.client.call(Method::DELETE, &path, NO_BODY).await
    }
}
