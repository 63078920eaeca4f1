//
//  vela-sdk
//  types/service.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Service resource.
//!
//! Services are long-running containers (databases, caches) started next to
//! the steps of a build. The API refers to them as "services"; the client
//! exposes them through `SvcService` to avoid clashing with the word
//! "service" used for every resource facade.

use serde::{Deserialize, Serialize};

/// A sidecar container attached to a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<i64>,

    /// Position of the service within the build.
    /// Required by `SvcService::update`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Container image the service runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<i64>,
}
