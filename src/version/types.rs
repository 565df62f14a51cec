//! Tag catalog types

use serde::Deserialize;

/// A tag returned by the GitHub tags endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub commit: Option<TagCommit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagCommit {
    pub sha: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commit: None,
        }
    }
}

/// Published tags of one action repository, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionVersions {
    pub name: String,
    pub tags: Vec<Tag>,
}

impl ActionVersions {
    pub fn new(name: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }

    /// Name of the newest tag
    pub fn latest(&self) -> Option<&str> {
        self.tags.first().map(|tag| tag.name.as_str())
    }

    pub fn contains(&self, tag_name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == tag_name)
    }

    /// The floating major tag for the newest release, if the project publishes one.
    ///
    /// `v3.2.1` maps to `v3` when a `v3` tag exists; otherwise the newest tag
    /// itself is returned.
    pub fn latest_major(&self) -> Option<&str> {
        let latest = self.latest()?;
        match major_prefix(latest) {
            Some(major) if self.contains(major) => Some(major),
            _ => Some(latest),
        }
    }
}

/// Part of a `v<digit>...` tag before the first `.`
fn major_prefix(tag: &str) -> Option<&str> {
    let rest = tag.strip_prefix('v')?;
    if !rest.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(tag.split_once('.').map_or(tag, |(major, _)| major))
}
