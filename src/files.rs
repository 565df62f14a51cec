//! Workflow file discovery

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// File extensions treated as workflow files
pub const YAML_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Path does not exist: {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Files selected from the command-line paths
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WorkflowFiles {
    /// YAML files to process, in argument order (directories sorted by path)
    pub found: Vec<PathBuf>,
    /// Explicit file arguments that are not YAML
    pub skipped: Vec<PathBuf>,
}

pub fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext))
}

/// Expand `paths` into the YAML files they name.
///
/// Directories are searched recursively. Explicit files without a YAML
/// extension are reported in `skipped` instead of failing.
pub fn collect_workflow_files(paths: &[PathBuf]) -> Result<WorkflowFiles, DiscoveryError> {
    let mut files = WorkflowFiles::default();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_file() && is_yaml(entry.path()) {
                    files.found.push(entry.into_path());
                }
            }
        } else if path.is_file() {
            if is_yaml(path) {
                files.found.push(path.clone());
            } else {
                debug!("Not a YAML file: {:?}", path);
                files.skipped.push(path.clone());
            }
        } else {
            return Err(DiscoveryError::NotFound(path.clone()));
        }
    }

    Ok(files)
}
