//! Rewrite layer
//!
//! Ties the matcher, spec parser and version selector together into a single
//! pass over a workflow file.
//!
//! # Modules
//!
//! - [`engine`]: `ActionUpdater`, finds `uses:` values and splices new versions in
//! - [`result`]: `UpdateResult` with diff printing and write-back
//! - [`diff`]: Unified diff rendering
//! - [`error`]: Error type for update operations

pub mod diff;
pub mod engine;
pub mod error;
pub mod result;

pub use engine::ActionUpdater;
pub use error::UpdateError;
pub use result::{ActionUpdate, UpdateResult};
