use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::version::error::LookupError;
use crate::version::registry::Registry;
use crate::version::types::ActionVersions;

/// In-memory tag cache keyed by `owner/repo`
///
/// Each repository is fetched at most once per cache instance. Entries are
/// never refreshed or evicted; the cache lives for one run of the tool.
pub struct VersionCache {
    registry: Arc<dyn Registry>,
    entries: HashMap<String, Arc<ActionVersions>>,
}

impl VersionCache {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self {
            registry,
            entries: HashMap::new(),
        }
    }

    /// Get the tag catalog for `action_name`, fetching it on first use.
    ///
    /// Failures are returned as-is and not cached.
    pub async fn fetch(&mut self, action_name: &str) -> Result<Arc<ActionVersions>, LookupError> {
        if let Some(versions) = self.entries.get(action_name) {
            debug!("Cache hit for {}", action_name);
            return Ok(Arc::clone(versions));
        }

        debug!("Fetching versions for {}...", action_name);
        let tags = self
            .registry
            .fetch_tags(action_name)
            .await
            .map_err(|source| LookupError::Registry {
                name: action_name.to_string(),
                source,
            })?;

        if tags.is_empty() {
            return Err(LookupError::NoTags(action_name.to_string()));
        }

        let versions = Arc::new(ActionVersions::new(action_name, tags));
        self.entries
            .insert(action_name.to_string(), Arc::clone(&versions));
        Ok(versions)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
