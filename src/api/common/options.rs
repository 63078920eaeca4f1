//
//  vela-sdk
//  api/common/options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query Options for List Endpoints
//!
//! Vela list endpoints use offset pagination driven by the `page` and
//! `per_page` query parameters. This module provides the standard
//! [`ListOptions`] struct and [`add_options`], which appends any serializable
//! options struct to a URL as a query string.
//!
//! # Encoding Rules
//!
//! | Rule | Behavior |
//! |------|----------|
//! | Key order | Struct declaration order |
//! | Key name | Field name, or `#[serde(rename = "...")]` |
//! | `None` fields | Omitted |
//! | Booleans | `true` / `false` |
//! | Integers | Decimal |
//! | Fragment | Kept after the query |
//!
//! # Example
//!
//! ```rust
//! use vela_sdk::api::common::{add_options, ListOptions};
//!
//! let opts = ListOptions { page: Some(2), per_page: Some(50) };
//! let url = add_options("http://localhost:8080/api/v1/repos", Some(&opts)).unwrap();
//! assert_eq!(url, "http://localhost:8080/api/v1/repos?page=2&per_page=50");
//! ```

use serde::{Deserialize, Serialize};

use super::{parse_url_strict, Result, VelaError};

/// Pagination options accepted by every `get_all` call.
///
/// Both fields are optional; the server falls back to page 1 and its own
/// default page size when they are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page number to fetch (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Appends URL query parameters built from `options` to `raw_url`.
///
/// # Parameters
///
/// * `raw_url` - An absolute URL or a resource path starting with `/`; may
///   already contain a query string
/// * `options` - Any struct (or map) implementing `Serialize`
///
/// # Returns
///
/// - `None` options: `raw_url` unchanged, without parsing it
/// - Options encoding to nothing: `raw_url` unchanged
/// - Otherwise: `raw_url` followed by `?` (or `&` when a query is present)
///   and the encoded parameters
///
/// # Errors
///
/// - [`VelaError::InvalidUrl`] if `raw_url` does not parse
/// - [`VelaError::Options`] if `options` is not a struct or map, e.g. a bare integer
///
/// Both variants carry the original `raw_url`.
pub fn add_options<T>(raw_url: &str, options: Option<&T>) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let Some(options) = options else {
        return Ok(raw_url.to_string());
    };

    // Resource paths are validated against a placeholder origin.
    let parsed = if raw_url.starts_with('/') {
        parse_url_strict(&format!("http://localhost{}", raw_url))
    } else {
        parse_url_strict(raw_url)
    };
    let url = parsed.map_err(|e| match e {
        VelaError::InvalidUrl { reason, .. } => VelaError::InvalidUrl {
            url: raw_url.to_string(),
            reason,
        },
        other => other,
    })?;

    let query = serde_urlencoded::to_string(options).map_err(|source| VelaError::Options {
        url: raw_url.to_string(),
        source,
    })?;

    if query.is_empty() {
        return Ok(raw_url.to_string());
    }

    let separator = match url.query() {
        Some(existing) if !existing.is_empty() => "&",
        // "http://host?" already ends with the separator
        Some(_) => "",
        None => "?",
    };

    // The query goes before any fragment; `fragment` keeps its leading '#'.
    let (base, fragment) = match raw_url.find('#') {
        Some(index) => raw_url.split_at(index),
        None => (raw_url, ""),
    };

    Ok(format!("{base}{separator}{query}{fragment}"))
}
