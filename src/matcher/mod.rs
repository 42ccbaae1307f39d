//! Site matching.
//!
//! Decides which stored domains are relevant to a visited domain and in
//! what order they should be offered.

mod domain;

pub use domain::{match_sites, DomainMatcher, MIN_MATCHING_LABELS};

use crate::types::Site;

/// Trait for site matchers
pub trait SiteMatcher: Send + Sync {
    /// Check if the site is relevant to this matcher
    fn matches(&self, site: &Site) -> bool;
}
