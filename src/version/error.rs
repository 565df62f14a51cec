use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Failed to fetch tags for {name}: {source}")]
    Registry {
        name: String,
        #[source]
        source: RegistryError,
    },

    #[error("No tags published for {0}")]
    NoTags(String),
}
