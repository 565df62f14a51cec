//! Outcome of rewriting one workflow text

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::parser::action_spec::ActionSpec;
use crate::update::diff::unified_diff;
use crate::update::error::UpdateError;

/// One rewritten action reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionUpdate {
    pub old_spec: ActionSpec,
    pub new_spec: ActionSpec,
}

/// Original and rewritten text of one workflow, plus what changed
///
/// Nothing is printed or written until the caller asks for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    path: Option<PathBuf>,
    old_content: String,
    new_content: String,
    changes: Vec<ActionUpdate>,
}

impl UpdateResult {
    pub fn new(
        path: Option<PathBuf>,
        old_content: String,
        new_content: String,
        changes: Vec<ActionUpdate>,
    ) -> Self {
        Self {
            path,
            old_content,
            new_content,
            changes,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn old_content(&self) -> &str {
        &self.old_content
    }

    pub fn new_content(&self) -> &str {
        &self.new_content
    }

    /// Changes in order of appearance in the text
    pub fn changes(&self) -> &[ActionUpdate] {
        &self.changes
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Unified diff between the original and rewritten text
    pub fn unified_diff(&self) -> String {
        let name = self
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        unified_diff(&name, &self.old_content, &self.new_content)
    }

    pub fn print_diff<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(self.unified_diff().as_bytes())
    }

    /// Write the rewritten text back to the file it was read from.
    pub fn write(&self) -> Result<(), UpdateError> {
        let path = self.path().ok_or(UpdateError::NoSourcePath)?;
        std::fs::write(path, &self.new_content).map_err(|source| UpdateError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
