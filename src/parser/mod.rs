//! Parser layer
//! - traits.rs: UsesMatcher trait (locating `uses:` values in text)
//! - types.rs: UsesMatch
//! - github_actions.rs: regex-based workflow matcher
//! - action_spec.rs: `owner/repo@version` parsing and rendering

pub mod action_spec;
pub mod github_actions;
pub mod traits;
pub mod types;

pub use action_spec::{ActionSpec, SpecError};
pub use github_actions::RegexUsesMatcher;
pub use traits::UsesMatcher;
pub use types::UsesMatch;
