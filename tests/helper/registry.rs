//! Registry test utilities

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use gha_autoupdate::update::ActionUpdater;
use gha_autoupdate::version::error::RegistryError;
use gha_autoupdate::version::registry::Registry;
use gha_autoupdate::version::types::Tag;

/// Mock registry serving canned tag lists and counting fetches
#[derive(Default)]
pub struct MockRegistry {
    tags: HashMap<String, Vec<String>>,
    fetches: AtomicUsize,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register tags for a repository, newest first
    pub fn with_tags(mut self, action_name: &str, tags: Vec<&str>) -> Self {
        self.tags.insert(
            action_name.to_string(),
            tags.into_iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_tags(&self, action_name: &str) -> Result<Vec<Tag>, RegistryError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.tags.get(action_name) {
            Some(tags) => Ok(tags.iter().map(Tag::new).collect()),
            None => Err(RegistryError::NotFound(action_name.to_string())),
        }
    }
}

/// Create an updater backed by `registry`, keeping a handle to inspect fetch counts
pub fn create_test_updater(registry: MockRegistry) -> (ActionUpdater, Arc<MockRegistry>) {
    let registry = Arc::new(registry);
    let updater = ActionUpdater::with_registry(registry.clone());
    (updater, registry)
}
