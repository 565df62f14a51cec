//! Action reference parsing (`owner/repo@version`)

use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_OWNER;

/// Error returned when a `uses:` value is not an action reference
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    #[error("Malformed action spec {0:?}: expected [owner/]repo@version")]
    Malformed(String),
}

/// A parsed action reference
///
/// `name` always carries an owner. When the source omitted it (`checkout@v4`)
/// the default owner is filled in and `qualified` is false, so rendering gives
/// back the short form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionSpec {
    pub name: String,
    pub version: String,
    pub qualified: bool,
}

impl ActionSpec {
    /// Copy of this spec pointing at `version`
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..self.clone()
        }
    }

    /// The `owner/repo` pair that owns the tags for this action.
    ///
    /// Sub-path actions (`aws-actions/amazon-ecr/login@v1`) and reusable
    /// workflows (`org/repo/.github/workflows/ci.yml@main`) are tagged on
    /// their repository.
    pub fn repository(&self) -> &str {
        match self.name.match_indices('/').nth(1) {
            Some((idx, _)) => &self.name[..idx],
            None => &self.name,
        }
    }
}

impl FromStr for ActionSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SpecError::Malformed(s.to_string());

        let (name, version) = s.rsplit_once('@').ok_or_else(malformed)?;
        if name.is_empty() || version.is_empty() {
            return Err(malformed());
        }

        let (name, qualified) = if name.contains('/') {
            (name.to_string(), true)
        } else {
            (format!("{DEFAULT_OWNER}/{name}"), false)
        };

        Ok(Self {
            name,
            version: version.to_string(),
            qualified,
        })
    }
}

impl fmt::Display for ActionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.qualified {
            write!(f, "{}@{}", self.name, self.version)
        } else {
            let repo = self
                .name
                .split_once('/')
                .map_or(self.name.as_str(), |(_, repo)| repo);
            write!(f, "{}@{}", repo, self.version)
        }
    }
}
