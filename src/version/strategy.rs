//! Version selection strategies

use std::fmt;
use std::str::FromStr;

use crate::parser::action_spec::ActionSpec;
use crate::version::cache::VersionCache;
use crate::version::error::LookupError;

/// Policy deciding which tag replaces the current version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionStrategy {
    /// Track the floating major tag (`v4`) when the project publishes one
    #[default]
    Major,
    /// Pin to the newest tag (`v4.2.0`)
    Specific,
}

impl VersionStrategy {
    pub const ALL: [VersionStrategy; 2] = [VersionStrategy::Major, VersionStrategy::Specific];

    pub fn as_str(&self) -> &'static str {
        match self {
            VersionStrategy::Major => "major",
            VersionStrategy::Specific => "specific",
        }
    }
}

impl fmt::Display for VersionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown version strategy: {0} (expected one of: major, specific)")]
pub struct UnknownStrategy(pub String);

impl FromStr for VersionStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Pick the version `spec` should be updated to.
pub async fn select_version(
    cache: &mut VersionCache,
    spec: &ActionSpec,
    strategy: VersionStrategy,
) -> Result<String, LookupError> {
    let versions = cache.fetch(spec.repository()).await?;

    let selected = match strategy {
        VersionStrategy::Major => versions.latest_major(),
        VersionStrategy::Specific => versions.latest(),
    };

    selected
        .map(str::to_string)
        .ok_or_else(|| LookupError::NoTags(versions.name.clone()))
}
