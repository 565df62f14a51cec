use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::action_spec::SpecError;
use crate::version::error::LookupError;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("{}:{line}: {source}", source_name(.path.as_deref()))]
    Spec {
        /// File the text was read from, `None` for in-memory text
        path: Option<PathBuf>,
        line: usize,
        #[source]
        source: SpecError,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Cannot write update result: it was not read from a file")]
    NoSourcePath,

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn source_name(path: Option<&Path>) -> String {
    path.map_or_else(|| "<text>".to_string(), |p| p.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_error_names_the_file() {
        let err = UpdateError::Spec {
            path: Some(PathBuf::from(".github/workflows/ci.yml")),
            line: 7,
            source: SpecError::Malformed("actions/checkout".to_string()),
        };

        assert!(err.to_string().starts_with(".github/workflows/ci.yml:7: "));
    }

    #[test]
    fn spec_error_without_path_names_in_memory_text() {
        let err = UpdateError::Spec {
            path: None,
            line: 1,
            source: SpecError::Malformed("x".to_string()),
        };

        assert!(err.to_string().starts_with("<text>:1: "));
    }
}
