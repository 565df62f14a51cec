//! Registry trait for fetching action tags from a remote source

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::Tag;

/// Trait for fetching the tag listing of an action repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches all tags for a repository
    ///
    /// # Arguments
    /// * `action_name` - The `owner/repo` pair (e.g., "actions/checkout")
    ///
    /// # Returns
    /// * `Ok(Vec<Tag>)` - Tags in the order the remote returns them, newest first
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_tags(&self, action_name: &str) -> Result<Vec<Tag>, RegistryError>;
}
