//
//  vela-sdk
//  api/build.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build API operations.
//!
//! # Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | `get` | GET | `/api/v1/repos/{org}/{repo}/builds/{number}` |
//! | `get_all` | GET | `/api/v1/repos/{org}/{repo}/builds` |
//! | `get_logs` | GET | `/api/v1/repos/{org}/{repo}/builds/{number}/logs` |
//! | `add` | POST | `/api/v1/repos/{org}/{repo}/builds` |
//! | `update` | PUT | `/api/v1/repos/{org}/{repo}/builds/{number}` |
//! | `remove` | DELETE | `/api/v1/repos/{org}/{repo}/builds/{number}` |
//! | `restart` | POST | `/api/v1/repos/{org}/{repo}/builds/{number}` |
//!
//! Path segments are not escaped; `org` and `repo` must already be path-safe.

use reqwest::Method;

use super::client::{Client, NO_BODY};
use super::common::{add_options, ListOptions, Response, Result, VelaError};
use crate::types::{Build, Log};

/// Operations on the builds of a repository.
///
/// Obtained from [`Client::build`].
///
/// # Example
///
/// ```rust,no_run
/// use vela_sdk::api::Client;
/// use vela_sdk::api::common::ListOptions;
///
/// # async fn example() -> vela_sdk::api::common::Result<()> {
/// let client = Client::new("https://vela.example.com", None)?;
/// let opts = ListOptions { page: Some(1), per_page: Some(10) };
/// let (builds, _) = client.build().get_all("github", "octocat", Some(&opts)).await?;
/// for build in builds {
///     println!("#{:?} {:?}", build.number, build.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BuildService<'a> {
    client: &'a Client,
}

impl<'a> BuildService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the build with the given number.
    pub async fn get(&self, org: &str, repo: &str, number: i32) -> Result<(Build, Response)> {
        let path = format!("/api/v1/repos/{}/{}/builds/{}", org, repo, number);
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Returns a page of builds for the repository.
    pub async fn get_all(
        &self,
        org: &str,
        repo: &str,
        opts: Option<&ListOptions>,
    ) -> Result<(Vec<Build>, Response)> {
        let path = add_options(&format!("/api/v1/repos/{}/{}/builds", org, repo), opts)?;
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Returns the logs of every step and service of the build.
    pub async fn get_logs(&self, org: &str, repo: &str, number: i32) -> Result<(Vec<Log>, Response)> {
        let path = format!("/api/v1/repos/{}/{}/builds/{}/logs", org, repo, number);
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Creates a build with the provided details.
    pub async fn add(&self, org: &str, repo: &str, target: &Build) -> Result<(Build, Response)> {
        let path = format!("/api/v1/repos/{}/{}/builds", org, repo);
        self.client.call(Method::POST, &path, Some(target)).await
    }

    /// Modifies a build with the provided details.
    ///
    /// The build is addressed by `target.number`.
    ///
    /// # Errors
    ///
    /// Returns [`VelaError::MissingField`] without sending anything when
    /// `target.number` is `None`.
    pub async fn update(&self, org: &str, repo: &str, target: &Build) -> Result<(Build, Response)> {
        let number = target.number.ok_or(VelaError::MissingField("number"))?;
        let path = format!("/api/v1/repos/{}/{}/builds/{}", org, repo, number);
        self.client.call(Method::PUT, &path, Some(target)).await
    }

    /// Deletes the build, returning the server's confirmation message.
    pub async fn remove(&self, org: &str, repo: &str, number: i32) -> Result<(String, Response)> {
        let path = format!("/api/v1/repos/{}/{}/builds/{}", org, repo, number);
        self.client.call(Method::DELETE, &path, NO_BODY).await
    }

    /// Restarts the build. The server answers with the newly created build.
    pub async fn restart(&self, org: &str, repo: &str, number: i32) -> Result<(Build, Response)> {
        let path = format!("/api/v1/repos/{}/{}/builds/{}", org, repo, number);
        self.client.call(Method::POST, &path, NO_BODY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use reqwest::StatusCode;

    const BUILD: &str = r#"{
        "id": 1, "repo_id": 1, "number": 1, "parent": 1,
        "event": "push", "status": "created",
        "commit": "48afb5bdc41ad69bf22588491333f7cf71135163",
        "branch": "master", "ref": "refs/heads/master"
    }"#;

    #[tokio::test]
    async fn test_build_get() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/repos/github/octocat/builds/1")
            .with_status(200)
            .with_body(BUILD)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let (build, response) = client.build().get("github", "octocat", 1).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(build.number, Some(1));
        assert_eq!(build.reference.as_deref(), Some("refs/heads/master"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_build_get_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/repos/github/octocat/builds/0")
            .with_status(404)
            .with_body(r#"{"error":"unable to retrieve build github/octocat#0"}"#)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let err = client.build().get("github", "octocat", 0).await.unwrap_err();

        assert!(matches!(err, VelaError::Api { ref message, .. } if message.contains("github/octocat#0")));
        assert_eq!(err.response().unwrap().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_build_get_all_with_options() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/repos/github/octocat/builds")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("per_page".into(), "5".into()),
            ]))
            .with_status(200)
            .with_body(format!("[{}, {}]", BUILD, BUILD))
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let opts = ListOptions { page: Some(2), per_page: Some(5) };
        let (builds, _) = client.build().get_all("github", "octocat", Some(&opts)).await.unwrap();

        assert_eq!(builds.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_build_get_logs() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/repos/github/octocat/builds/1/logs")
            .with_status(200)
            .with_body(r#"[{"id": 1, "step_id": 1, "data": "aGVsbG8="}, {"id": 2, "service_id": 1, "data": null}]"#)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let (logs, _) = client.build().get_logs("github", "octocat", 1).await.unwrap();

        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].data.as_deref(), Some(&b"hello"[..]));
        assert!(logs[1].data.is_none());
    }

    #[tokio::test]
    async fn test_build_add() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/repos/github/octocat/builds")
            .match_body(Matcher::Json(serde_json::json!({"event": "push", "branch": "master"})))
            .with_status(201)
            .with_body(BUILD)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let target = Build {
            event: Some("push".to_string()),
            branch: Some("master".to_string()),
            ..Default::default()
        };
        let (build, response) = client.build().add("github", "octocat", &target).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(build.id, Some(1));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_build_update() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/v1/repos/github/octocat/builds/1")
            .match_body(Matcher::PartialJson(serde_json::json!({"number": 1, "status": "success"})))
            .with_status(200)
            .with_body(BUILD)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let target = Build {
            number: Some(1),
            status: Some("success".to_string()),
            ..Default::default()
        };
        client.build().update("github", "octocat", &target).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_build_update_without_number() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("PUT", Matcher::Any).expect(0).create_async().await;

        let client = Client::new(&server.url(), None).unwrap();
        let err = client.build().update("github", "octocat", &Build::default()).await.unwrap_err();

        assert!(matches!(err, VelaError::MissingField("number")));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_build_remove() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/api/v1/repos/github/octocat/builds/1")
            .with_status(200)
            .with_body(r#""Build github/octocat/1 deleted""#)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let (message, _) = client.build().remove("github", "octocat", 1).await.unwrap();
        assert_eq!(message, "Build github/octocat/1 deleted");
    }

    #[tokio::test]
    async fn test_build_restart() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/repos/github/octocat/builds/1")
            .with_status(201)
            .with_body(BUILD)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let (build, _) = client.build().restart("github", "octocat", 1).await.unwrap();

        assert_eq!(build.status.as_deref(), Some("created"));
        mock.assert_async().await;
    }
}
