//
//  vela-sdk
//  types/login.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Login payload exchanged with `POST /login`.

use serde::{Deserialize, Serialize};

/// Credentials sent to the server and the token it answers with.
///
/// Callers fill in `username`, `password` and optionally `otp`; the server
/// echoes the username and returns `token`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// One-time password for accounts with two-factor authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,

    /// Bearer token issued by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
