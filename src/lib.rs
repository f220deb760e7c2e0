//! `snag` - a lean in-memory issue tracker.
//!
//! The crate is organized into the following modules:
//!
//! - [`models`] - the Issue record
//! - [`store`] - ordered in-memory collection of issues
//! - [`manager`] - query/mutation facade over the store
//! - [`io`] - JSON import/export used by the CLI
//! - [`error`] - error types

#![forbid(unsafe_code)]

pub mod error;
pub mod io;
pub mod manager;
pub mod models;
pub mod store;

pub use error::{Result, TrackerError};
pub use manager::IssueManager;
pub use models::Issue;
pub use store::IssueStore;
