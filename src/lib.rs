//! browserpass-store - domain-ranked lookup over a `pass` password store
//!
//! This library reads a password store laid out as
//! `<root>/<domain>/<user>.gpg` and provides:
//! - Lookup of the entries relevant to a visited domain, most specific first
//! - Glob-based free-text search over the store
//! - Opening a single entry as a raw byte stream (decryption is left to the
//!   caller)
//!
//! # Example
//!
//! ```rust,no_run
//! use browserpass_store::{DiskStore, Store};
//!
//! // $PASSWORD_STORE_DIR, or ~/.password-store
//! let store = DiskStore::from_env().unwrap();
//!
//! // With "github.com/alice.gpg" and "gist.github.com/bob.gpg" in the store
//! let logins = store.lookup("gist.github.com").unwrap();
//! assert_eq!(logins, vec!["gist.github.com/bob", "github.com/alice"]);
//! ```
//!
//! # Matching
//!
//! Domains are compared label by label starting at the TLD. A stored domain
//! is relevant when it is the visited domain or one of its parents, and at
//! least two labels agree:
//!
//! | Visited | Stored | Relevant |
//! |---------|--------|----------|
//! | `sub.domain.tld` | `domain.tld` | yes |
//! | `sub.domain.tld` | `sub.domain.tld` | yes |
//! | `domain.tld` | `sub.domain.tld` | no |
//! | `other.domain.tld` | `sub.domain.tld` | no |
//! | `localhost` | `localhost` | no |
//!
//! Results are ordered by the length of the stored domain, longest first.

pub mod enumerator;
pub mod error;
pub mod matcher;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use enumerator::{Enumerator, DEFAULT_QUEUE_CAPACITY};
pub use error::{Result, StoreError, StoreErrorKind};
pub use matcher::{match_sites, DomainMatcher, SiteMatcher, MIN_MATCHING_LABELS};
pub use store::{default_store_path, DiskStore, Store, StoreOptions, STORE_DIR_ENV};
pub use types::{Site, CREDENTIAL_EXTENSION};

#[cfg(feature = "async")]
pub use store::AsyncStore;
