//
//  vela-sdk
//  types/build.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build resource.
//!
//! A build is one execution of a repository's pipeline, created by a webhook
//! event (push, pull request, tag, deployment) or by a manual restart.
//!
//! # Build Lifecycle
//!
//! ```text
//! pending -> running -> success | failure | killed | error
//! ```
//!
//! Timestamps (`enqueued`, `created`, `started`, `finished`) are Unix
//! seconds as reported by the server.

use serde::{Deserialize, Serialize};

/// A single pipeline execution for a repository.
///
/// Every field is optional: the server omits fields it does not know yet
/// (e.g. `finished` on a running build), and callers creating a build only
/// fill in the fields they care about.
///
/// # Example
///
/// ```rust
/// use vela_sdk::types::Build;
///
/// let build = Build {
///     number: Some(1),
///     branch: Some("main".to_string()),
///     event: Some("push".to_string()),
///     ..Default::default()
/// };
/// assert!(build.id.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    /// Unique identifier assigned by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Identifier of the owning repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<i64>,

    /// Build number, sequential within the repository.
    /// Required by `BuildService::update`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,

    /// Number of the build this one was restarted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i32>,

    /// Webhook event that triggered the build (`push`, `pull_request`, `tag`, `deployment`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    /// Current status (`pending`, `running`, `success`, `failure`, `killed`, `error`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Error message when the build could not run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Time the build was queued (Unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enqueued: Option<i64>,

    /// Time the build was created (Unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    /// Time the build started running (Unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<i64>,

    /// Time the build finished (Unix seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<i64>,

    /// Deployment target for `deployment` events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy: Option<String>,

    /// Clone URL of the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone: Option<String>,

    /// Link to the commit or pull request in the source provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Commit message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Commit SHA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// User whose action triggered the webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Author of the commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Full git reference (`refs/heads/main`).
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Base reference for pull requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_ref: Option<String>,

    /// Worker host that ran the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Container runtime used by the worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,

    /// Executor distribution used by the worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_omits_unset_fields() {
        let build = Build {
            number: Some(7),
            reference: Some("refs/heads/main".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&build).unwrap();
        assert_eq!(json, serde_json::json!({"number": 7, "ref": "refs/heads/main"}));
    }

    #[test]
    fn test_build_decodes_server_payload() {
        let json = r#"{
            "id": 1, "repo_id": 1, "number": 1, "parent": 1,
            "event": "push", "status": "created", "error": "",
            "enqueued": 1563474077, "created": 1563474076,
            "started": 1563474077, "finished": 0,
            "commit": "48afb5bdc41ad69bf22588491333f7cf71135163",
            "branch": "master", "ref": "refs/heads/master",
            "base_ref": "", "host": "example.company.com"
        }"#;
        let build: Build = serde_json::from_str(json).unwrap();
        assert_eq!(build.number, Some(1));
        assert_eq!(build.reference.as_deref(), Some("refs/heads/master"));
        assert_eq!(build.finished, Some(0));
        assert!(build.deploy.is_none());
    }
}
