//! Descriptor validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check each handler entry declares exactly one target
//! - Reject relative urls, stray upload patterns, duplicate exact urls
//! - Require an admin key when an admin-only route is declared
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppDescriptor → Vec<ValidationError>
//! - Runs before the route table is built

use thiserror::Error;

use crate::config::schema::{AppDescriptor, LoginPolicy};

/// A single semantic problem in the descriptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Urls are absolute paths; anything else is a typo.
    #[error("handler {index}: url must start with '/', got {url:?}")]
    UrlNotAbsolute { index: usize, url: String },

    /// Exactly one of static_files, static_dir, script is required.
    #[error("handler {index} ({url}): exactly one target required, found {found}")]
    AmbiguousTarget {
        index: usize,
        url: String,
        found: usize,
    },

    /// Wildcards only make sense on script routes; file routes match
    /// exactly and directory routes already match by prefix.
    #[error("handler {index} ({url}): wildcard urls are only supported with script targets")]
    WildcardWithoutScript { index: usize, url: String },

    /// `upload` is deployment bookkeeping for static_files entries.
    #[error("handler {index} ({url}): upload is only meaningful with static_files")]
    StrayUpload { index: usize, url: String },

    /// Two entries with the same url; the second can never match.
    #[error("handler {index} ({url}): duplicate of handler {first}")]
    DuplicateUrl {
        index: usize,
        url: String,
        first: usize,
    },

    /// An admin-only route with no key configured would be unreachable.
    #[error("admin api_key must not be empty when an admin-only route is declared")]
    MissingAdminKey,
}

/// Validate a parsed descriptor. Returns every problem found; an empty
/// vector means the descriptor is acceptable.
pub fn validate_descriptor(descriptor: &AppDescriptor) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, entry) in descriptor.handlers.iter().enumerate() {
        if !entry.url.starts_with('/') {
            errors.push(ValidationError::UrlNotAbsolute {
                index,
                url: entry.url.clone(),
            });
        }

        let found = entry.declared_targets();
        if found != 1 {
            errors.push(ValidationError::AmbiguousTarget {
                index,
                url: entry.url.clone(),
                found,
            });
        }

        if entry.url.contains(".*") && entry.script.is_none() {
            errors.push(ValidationError::WildcardWithoutScript {
                index,
                url: entry.url.clone(),
            });
        }

        if entry.upload.is_some() && entry.static_files.is_none() {
            errors.push(ValidationError::StrayUpload {
                index,
                url: entry.url.clone(),
            });
        }

        if let Some(first) = descriptor.handlers[..index]
            .iter()
            .position(|earlier| earlier.url == entry.url)
        {
            errors.push(ValidationError::DuplicateUrl {
                index,
                url: entry.url.clone(),
                first,
            });
        }
    }

    let has_admin_route = descriptor
        .handlers
        .iter()
        .any(|entry| entry.login == Some(LoginPolicy::Admin));
    if has_admin_route && descriptor.admin.api_key.is_empty() {
        errors.push(ValidationError::MissingAdminKey);
    }

    errors
}
