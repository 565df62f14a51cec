//! UsesMatcher trait definition

use crate::parser::types::UsesMatch;

/// Trait for locating action references in workflow text
///
/// Implementations only find spans; parsing, version selection and splicing
/// happen in the update engine, so the matching strategy can be swapped
/// without touching the rest of the pipeline.
pub trait UsesMatcher: Send + Sync {
    /// Find every `uses:` value in `content`, in order of appearance.
    ///
    /// Returned spans must not overlap.
    fn find_uses(&self, content: &str) -> Vec<UsesMatch>;
}
