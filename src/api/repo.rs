//
//  vela-sdk
//  api/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository API operations.
//!
//! # Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | `get` | GET | `/api/v1/repos/{org}/{repo}` |
//! | `get_all` | GET | `/api/v1/repos` |
//! | `add` | POST | `/api/v1/repos` |
//! | `update` | PUT | `/api/v1/repos/{org}/{repo}` |
//! | `remove` | DELETE | `/api/v1/repos/{org}/{repo}` |
//! | `repair` | PATCH | `/api/v1/repos/{org}/{repo}/repair` |
//! | `chown` | PATCH | `/api/v1/repos/{org}/{repo}/chown` |

use reqwest::Method;

use super::client::{Client, NO_BODY};
use super::common::{add_options, ListOptions, Response, Result};
use crate::types::Repo;

/// Operations on repositories enabled in Vela.
#[derive(Debug, Clone, Copy)]
pub struct RepoService<'a> {
    client: &'a Client,
}

impl<'a> RepoService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the repository.
    pub async fn get(&self, org: &str, repo: &str) -> Result<(Repo, Response)> {
        let path = format!("/api/v1/repos/{}/{}", org, repo);
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Returns a page of repositories the authenticated user can access.
    pub async fn get_all(&self, opts: Option<&ListOptions>) -> Result<(Vec<Repo>, Response)> {
        let path = add_options("/api/v1/repos", opts)?;
        self.client.call(Method::GET, &path, NO_BODY).await
    }

    /// Enables a repository.
    pub async fn add(&self, target: &Repo) -> Result<(Repo, Response)> {
        self.client.call(Method::POST, "/api/v1/repos", Some(target)).await
    }

    /// Modifies the repository settings.
    pub async fn update(&self, org: &str, repo: &str, target: &Repo) -> Result<(Repo, Response)> {
        let path = format!("/api/v1/repos/{}/{}", org, repo);
        self.client.call(Method::PUT, &path, Some(target)).await
    }

    /// Disables the repository, returning the server's confirmation message.
    pub async fn remove(&self, org: &str, repo: &str) -> Result<(String, Response)> {
        let path = format!("/api/v1/repos/{}/{}", org, repo);
        self.client.call(Method::DELETE, &path, NO_BODY).await
    }

    /// Recreates the repository webhook in the source provider.
    pub async fn repair(&self, org: &str, repo: &str) -> Result<(String, Response)> {
        let path = format!("/api/v1/repos/{}/{}/repair", org, repo);
        self.client.call(Method::PATCH, &path, NO_BODY).await
    }

    /// Transfers ownership of the repository to the authenticated user.
    pub async fn chown(&self, org: &str, repo: &str) -> Result<(String, Response)> {
        let path = format!("/api/v1/repos/{}/{}/chown", org, repo);
        self.client.call(Method::PATCH, &path, NO_BODY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use reqwest::StatusCode;

    const REPO: &str = r#"{
        "id": 1, "user_id": 1, "org": "github", "name": "octocat",
        "full_name": "github/octocat", "link": "https://github.com/github/octocat",
        "clone": "https://github.com/github/octocat.git", "branch": "master",
        "timeout": 60, "visibility": "public", "private": false, "trusted": false,
        "active": true, "allow_pull": false, "allow_push": true,
        "allow_deploy": false, "allow_tag": false
    }"#;

    #[tokio::test]
    async fn test_repo_get() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/repos/github/octocat")
            .with_status(200)
            .with_body(REPO)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let (repo, _) = client.repo().get("github", "octocat").await.unwrap();

        assert_eq!(repo.full_name(), Some("github/octocat".to_string()));
        assert_eq!(repo.timeout, Some(60));
        assert_eq!(repo.allow_push, Some(true));
    }

    #[tokio::test]
    async fn test_repo_get_all() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/repos")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .with_status(200)
            .with_body(format!("[{}]", REPO))
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let opts = ListOptions { page: None, per_page: Some(100) };
        let (repos, _) = client.repo().get_all(Some(&opts)).await.unwrap();

        assert_eq!(repos.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_repo_add_and_update() {
        let mut server = mockito::Server::new_async().await;
        let add = server
            .mock("POST", "/api/v1/repos")
            .match_body(Matcher::Json(serde_json::json!({"org": "github", "name": "octocat", "active": true})))
            .with_status(201)
            .with_body(REPO)
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/api/v1/repos/github/octocat")
            .match_body(Matcher::PartialJson(serde_json::json!({"active": true})))
            .with_status(200)
            .with_body(REPO)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let target = Repo {
            org: Some("github".to_string()),
            name: Some("octocat".to_string()),
            active: Some(true),
            ..Default::default()
        };

        let (_, response) = client.repo().add(&target).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        client.repo().update("github", "octocat", &target).await.unwrap();

        add.assert_async().await;
        update.assert_async().await;
    }

    #[tokio::test]
    async fn test_repo_remove_repair_chown() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/api/v1/repos/github/octocat")
            .with_status(200)
            .with_body(r#""Repo github/octocat deleted""#)
            .create_async()
            .await;
        server
            .mock("PATCH", "/api/v1/repos/github/octocat/repair")
            .with_status(200)
            .with_body(r#""Repo github/octocat repaired""#)
            .create_async()
            .await;
        server
            .mock("PATCH", "/api/v1/repos/github/octocat/chown")
            .with_status(200)
            .with_body(r#""Repo github/octocat changed owner""#)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let repos = client.repo();

        assert_eq!(repos.remove("github", "octocat").await.unwrap().0, "Repo github/octocat deleted");
        assert_eq!(repos.repair("github", "octocat").await.unwrap().0, "Repo github/octocat repaired");
        assert_eq!(repos.chown("github", "octocat").await.unwrap().0, "Repo github/octocat changed owner");
    }

    #[tokio::test]
    async fn test_repo_forbidden() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/api/v1/repos/github/octocat")
            .with_status(403)
            .with_body(r#"{"error":"user does not have admin permissions"}"#)
            .create_async()
            .await;

        let client = Client::new(&server.url(), None).unwrap();
        let err = client.repo().remove("github", "octocat").await.unwrap_err();
        assert_eq!(err.to_string(), "API error (403 Forbidden): user does not have admin permissions");
    }
}
