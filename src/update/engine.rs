//! Rewrites action references in workflow text

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::parser::action_spec::ActionSpec;
use crate::parser::github_actions::RegexUsesMatcher;
use crate::parser::traits::UsesMatcher;
use crate::update::error::UpdateError;
use crate::update::result::{ActionUpdate, UpdateResult};
use crate::version::cache::VersionCache;
use crate::version::registry::Registry;
use crate::version::strategy::{VersionStrategy, select_version};

/// Updates `uses:` references to the version chosen by a [`VersionStrategy`].
///
/// Holds the tag cache, so reusing one updater across files fetches each
/// repository only once.
pub struct ActionUpdater {
    matcher: Arc<dyn UsesMatcher>,
    cache: VersionCache,
}

impl ActionUpdater {
    pub fn new(matcher: Arc<dyn UsesMatcher>, registry: Arc<dyn Registry>) -> Self {
        Self {
            matcher,
            cache: VersionCache::new(registry),
        }
    }

    /// Updater using the regex-based `uses:` matcher
    pub fn with_registry(registry: Arc<dyn Registry>) -> Self {
        Self::new(Arc::new(RegexUsesMatcher::new()), registry)
    }

    pub fn cache(&self) -> &VersionCache {
        &self.cache
    }

    /// Read `path` and rewrite its action references.
    pub async fn update_path(
        &mut self,
        path: &Path,
        strategy: VersionStrategy,
    ) -> Result<UpdateResult, UpdateError> {
        let content = std::fs::read_to_string(path).map_err(|source| UpdateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.update_text(&content, Some(path), strategy).await
    }

    /// Rewrite every action reference in `content`.
    ///
    /// Text outside the replaced values is copied through unchanged. The first
    /// spec or lookup error aborts the whole text; no partial result is returned.
    pub async fn update_text(
        &mut self,
        content: &str,
        path: Option<&Path>,
        strategy: VersionStrategy,
    ) -> Result<UpdateResult, UpdateError> {
        let mut new_content = String::with_capacity(content.len());
        let mut changes = Vec::new();
        let mut copied_to = 0;

        for uses in self.matcher.find_uses(content) {
            let span = uses.span();
            debug_assert!(span.start >= copied_to, "overlapping uses matches");

            if uses.is_local_or_docker() {
                debug!("Skipping non-repository reference {}", uses.value);
                continue;
            }

            let spec: ActionSpec = uses.value.parse().map_err(|source| UpdateError::Spec {
                path: path.map(Path::to_path_buf),
                line: uses.line + 1,
                source,
            })?;

            let new_version = select_version(&mut self.cache, &spec, strategy).await?;
            if new_version == spec.version {
                debug!("{} is up to date", spec);
                continue;
            }

            let new_spec = spec.with_version(new_version);
            new_content.push_str(&content[copied_to..span.start]);
            new_content.push_str(&render_value(&new_spec, uses.quote));
            copied_to = span.end;

            changes.push(ActionUpdate {
                old_spec: spec,
                new_spec,
            });
        }
        new_content.push_str(&content[copied_to..]);

        Ok(UpdateResult::new(
            path.map(Path::to_path_buf),
            content.to_string(),
            new_content,
            changes,
        ))
    }
}

/// Render a spec, re-applying the quoting the source value used.
fn render_value(spec: &ActionSpec, quote: Option<char>) -> String {
    let rendered = spec.to_string();
    match quote {
        Some('"') => format!(
            "\"{}\"",
            rendered.replace('\\', "\\\\").replace('"', "\\\"")
        ),
        Some('\'') => format!("'{}'", rendered.replace('\'', "''")),
        _ => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::parser::action_spec::SpecError;
    use crate::version::error::{LookupError, RegistryError};
    use crate::version::registry::MockRegistry;
    use crate::version::types::Tag;

    fn tags(names: &[&str]) -> Vec<Tag> {
        names.iter().map(|name| Tag::new(*name)).collect()
    }

    /// Registry serving `v4, v3, v2` for every repository
    fn updater() -> ActionUpdater {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_tags()
            .returning(|_| Ok(tags(&["v4", "v3", "v2"])));
        ActionUpdater::with_registry(Arc::new(registry))
    }

    #[tokio::test]
    async fn update_text_rewrites_outdated_reference() {
        let content = "    steps:\n      - uses: actions/checkout@v1\n";

        let result = updater()
            .update_text(content, None, VersionStrategy::Major)
            .await
            .unwrap();

        assert_eq!(
            result.new_content(),
            "    steps:\n      - uses: actions/checkout@v4\n"
        );
        assert_eq!(result.old_content(), content);
        assert_eq!(
            result.changes(),
            &[ActionUpdate {
                old_spec: "actions/checkout@v1".parse().unwrap(),
                new_spec: "actions/checkout@v4".parse().unwrap(),
            }]
        );
    }

    #[tokio::test]
    async fn update_text_leaves_up_to_date_text_untouched() {
        let content = "steps:\n  - uses: actions/checkout@v4\n  - uses: cache@v4\n";

        let result = updater()
            .update_text(content, None, VersionStrategy::Major)
            .await
            .unwrap();

        assert!(!result.has_changes());
        assert_eq!(result.new_content(), content);
    }

    #[tokio::test]
    async fn update_text_preserves_everything_outside_the_value() {
        let content = concat!(
            "# header comment\r\n",
            "jobs:\r\n",
            "  build:\r\n",
            "    steps:\r\n",
            "      - uses:   checkout@v2   # pinned for reasons\r\n",
            "      - uses: \"actions/setup-node@v1\"\r\n",
            "      - uses: './.github/actions/local'\r\n",
            "      - uses: 'actions/cache@v3' # cache\r\n",
            "      - run: echo done",
        );

        let result = updater()
            .update_text(content, None, VersionStrategy::Major)
            .await
            .unwrap();

        assert_eq!(
            result.new_content(),
            concat!(
                "# header comment\r\n",
                "jobs:\r\n",
                "  build:\r\n",
                "    steps:\r\n",
                "      - uses:   checkout@v4   # pinned for reasons\r\n",
                "      - uses: \"actions/setup-node@v4\"\r\n",
                "      - uses: './.github/actions/local'\r\n",
                "      - uses: 'actions/cache@v4' # cache\r\n",
                "      - run: echo done",
            )
        );
        let old_versions: Vec<&str> = result
            .changes()
            .iter()
            .map(|c| c.old_spec.version.as_str())
            .collect();
        assert_eq!(old_versions, vec!["v2", "v1", "v3"]);
    }

    #[tokio::test]
    async fn update_text_fetches_each_repository_once() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_tags()
            .times(2)
            .returning(|_| Ok(tags(&["v4"])));
        let mut updater = ActionUpdater::with_registry(Arc::new(registry));
        let content = concat!(
            "  - uses: actions/checkout@v1\n",
            "  - uses: checkout@v2\n",
            "  - uses: actions/cache@v1\n",
            "  - uses: actions/checkout@v3\n",
        );

        let result = updater
            .update_text(content, None, VersionStrategy::Major)
            .await
            .unwrap();

        assert_eq!(result.changes().len(), 4);
        assert_eq!(updater.cache().len(), 2);
    }

    #[tokio::test]
    async fn update_text_skips_docker_references() {
        let mut registry = MockRegistry::new();
        registry.expect_fetch_tags().never();
        let mut updater = ActionUpdater::with_registry(Arc::new(registry));
        let content = "  - uses: docker://alpine:3.19\n  - uses: ./local\n";

        let result = updater
            .update_text(content, None, VersionStrategy::Major)
            .await
            .unwrap();

        assert!(!result.has_changes());
    }

    #[tokio::test]
    async fn update_text_aborts_on_malformed_spec() {
        let content = "  - uses: actions/checkout@v1\n  - uses: actions/no-version\n";

        let result = updater()
            .update_text(content, Some(Path::new("ci.yml")), VersionStrategy::Major)
            .await;

        match result {
            Err(UpdateError::Spec {
                path,
                line,
                source: SpecError::Malformed(_),
            }) => {
                assert_eq!(path, Some(PathBuf::from("ci.yml")));
                assert_eq!(line, 2);
            }
            other => panic!("expected a spec error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_text_aborts_on_lookup_failure() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_tags()
            .times(1)
            .returning(|name| Err(RegistryError::NotFound(name.to_string())));
        let mut updater = ActionUpdater::with_registry(Arc::new(registry));

        let result = updater
            .update_text("  - uses: gone/away@v1\n", None, VersionStrategy::Major)
            .await;

        assert!(matches!(
            result,
            Err(UpdateError::Lookup(LookupError::Registry { .. }))
        ));
    }

    #[test]
    fn render_value_reapplies_quotes() {
        let spec: ActionSpec = "actions/checkout@v4".parse().unwrap();

        assert_eq!(render_value(&spec, None), "actions/checkout@v4");
        assert_eq!(render_value(&spec, Some('"')), "\"actions/checkout@v4\"");
        assert_eq!(render_value(&spec, Some('\'')), "'actions/checkout@v4'");
    }
}
