//
//  vela-sdk
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Vela SDK
//!
//! A typed, async client for the REST API of the Vela CI/CD server.
//!
//! ## Overview
//!
//! The crate builds authenticated JSON requests against a configured base
//! URL, sends them, and decodes responses into typed resources. API errors
//! are surfaced as [`VelaError`](api::VelaError) values that keep the
//! response metadata.
//!
//! ## Module Structure
//!
//! - [`api`]: The [`Client`], its resource services, and shared request helpers
//! - [`auth`]: Bearer and Basic credentials
//! - [`config`]: TOML/environment configuration
//! - [`types`]: Build, step, service, repo, secret, log and login resources
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vela_sdk::{Client, Config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut config = Config::load()?;
//! config.apply_env();
//!
//! let client = Client::from_config(&config)?;
//! let (builds, _) = client.build().get_all("github", "octocat", None).await?;
//! println!("{} builds", builds.len());
//! # Ok(())
//! # }
//! ```

/// HTTP client, resource services, and error types.
pub mod api;

/// Credentials attached to outgoing requests.
pub mod auth;

/// Configuration file and environment handling.
pub mod config;

/// Vela resource types.
pub mod types;

pub use api::Client;
pub use config::Config;

/// Crate version, as reported in the default `User-Agent`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
