//
//  vela-sdk
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! The [`Client`] owns the HTTP transport, base URL and credentials. Each
//! resource family is reached through a lightweight service borrowed from
//! it:
//!
//! | Accessor | Service | Resource |
//! |----------|---------|----------|
//! | [`Client::authentication`] | [`AuthenticationService`](crate::auth::AuthenticationService) | Credentials |
//! | [`Client::authorization`] | [`AuthorizationService`] | `POST /login` |
//! | [`Client::build`] | [`BuildService`] | Builds |
//! | [`Client::log`] | [`LogService`] | Step and service logs |
//! | [`Client::repo`] | [`RepoService`] | Repositories |
//! | [`Client::secret`] | [`SecretService`] | Secrets |
//! | [`Client::step`] | [`StepService`] | Steps |
//! | [`Client::svc`] | [`SvcService`] | Services |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vela_sdk::api::Client;
//!
//! # async fn example() -> vela_sdk::api::common::Result<()> {
//! let mut client = Client::new("https://vela.example.com", None)?;
//! client.authentication().set_token_auth("superSecretToken");
//!
//! let (repo, _) = client.repo().get("github", "octocat").await?;
//! println!("{:?}", repo.full_name());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`VelaError`]. HTTP-level failures (`Api`,
//! `Status`, `Decode`) still carry the [`Response`] metadata, available via
//! [`VelaError::response`].

pub mod authorization;
pub mod build;
pub mod client;
pub mod common;
pub mod log;
pub mod repo;
pub mod secret;
pub mod step;
pub mod svc;

pub use authorization::AuthorizationService;
pub use build::BuildService;
pub use client::Client;
pub use common::{ListOptions, Response, VelaError};
pub use log::LogService;
pub use repo::RepoService;
pub use secret::SecretService;
pub use step::StepService;
pub use svc::SvcService;
