//! GitHub Tags API registry implementation

use crate::config::{Config, Credentials, GITHUB_ACCEPT, USER_AGENT};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::Tag;
use tracing::{debug, warn};

/// Registry implementation for the GitHub repository tags API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry with a custom base URL
    pub fn new(base_url: &str, credentials: Option<Credentials>) -> Result<Self, RegistryError> {
        Ok(Self {
            client: reqwest::Client::builder().user_agent(USER_AGENT).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        Self::new(&config.api_base_url, config.credentials.clone())
    }
}

#[async_trait::async_trait]
impl Registry for GitHubRegistry {
    async fn fetch_tags(&self, action_name: &str) -> Result<Vec<Tag>, RegistryError> {
        let url = format!("{}/repos/{}/tags", self.base_url, action_name);
        debug!("Fetching tags from {}", url);

        let request = self.client.get(&url).header("Accept", GITHUB_ACCEPT);
        let request = match &self.credentials {
            Some(Credentials::Basic { username, password }) => {
                request.basic_auth(username, Some(password))
            }
            Some(Credentials::Bearer(token)) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(action_name.to_string()));
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let tags: Vec<Tag> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub tags response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(tags)
    }
}
