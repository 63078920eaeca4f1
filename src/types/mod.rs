//
//  vela-sdk
//  types/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Vela API resource types.
//!
//! Data-transfer objects mirroring the server's JSON schema. Every field is
//! an `Option` that is skipped when unset, so the same type is used to
//! decode server responses and to send partial create/update payloads.
//!
//! The client only serializes and deserializes these types; it never
//! validates them.
//!
//! # Module Organization
//!
//! - [`build`] - Pipeline executions
//! - [`step`] - Steps within a build
//! - [`service`] - Sidecar services within a build
//! - [`repo`] - Enabled repositories
//! - [`secret`] - Secrets injected into builds
//! - [`log`] - Step and service output
//! - [`login`] - Login request/response

pub mod build;
pub mod log;
pub mod login;
pub mod repo;
pub mod secret;
pub mod service;
pub mod step;

pub use build::Build;
pub use log::Log;
pub use login::Login;
pub use repo::Repo;
pub use secret::Secret;
pub use service::Service;
pub use step::Step;
