//
//  vela-sdk
//  types/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository resource.
//!
//! A repo is a source repository enabled in Vela. Its `allow_*` flags select
//! which webhook events create builds.

use serde::{Deserialize, Serialize};

/// A repository enabled in Vela.
///
/// # Example
///
/// ```rust
/// use vela_sdk::types::Repo;
///
/// let repo = Repo {
///     org: Some("github".to_string()),
///     name: Some("octocat".to_string()),
///     allow_push: Some(true),
///     ..Default::default()
/// };
/// assert_eq!(repo.full_name(), Some("github/octocat".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Identifier of the user that owns the repo in Vela.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Organization (or user) the repository belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `org/name` as reported by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Web link to the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Clone URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone: Option<String>,

    /// Default branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Build timeout in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    /// Whether builds may run privileged containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_pull: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_push: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_deploy: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_tag: Option<bool>,
}

impl Repo {
    /// Returns the `org/name` pair, preferring the server-provided `full_name`.
    pub fn full_name(&self) -> Option<String> {
        if let Some(full_name) = &self.full_name {
            return Some(full_name.clone());
        }
        match (&self.org, &self.name) {
            (Some(org), Some(name)) => Some(format!("{}/{}", org, name)),
            _ => None,
        }
    }
}
