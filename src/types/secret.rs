//
//  vela-sdk
//  types/secret.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Secret resource.
//!
//! Secrets are addressed by engine (`native`, `vault`), type (`org`, `repo`,
//! `shared`), organization and a type-specific name (the repo name, the team
//! name, or `*` for org secrets).

use serde::{Deserialize, Serialize};

/// A secret injected into build containers.
///
/// `value` is write-only on most servers: it is sent when creating or
/// updating a secret and comes back empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    /// Secret name.
    /// Required by `SecretService::update`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Secret type (`org`, `repo`, `shared`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Images allowed to receive the secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    /// Events allowed to receive the secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,

    /// Whether the secret is exposed to steps running `commands`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_command: Option<bool>,
}
