use std::fmt;

// =============================================================================
// GitHub API constants
// =============================================================================

/// Default base URL for the GitHub REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Owner assumed for action references written without one (`checkout@v4`)
pub const DEFAULT_OWNER: &str = "actions";

/// Media type requested from the tags endpoint
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// User-Agent sent with every API request
pub const USER_AGENT: &str = concat!("gha-autoupdate/", env!("CARGO_PKG_VERSION"));

/// Environment variables consulted for credentials, in priority order
pub const AUTH_ENV_VARS: [&str; 2] = ["GITHUB_AUTH", "GITHUB_TOKEN"];

/// Environment variable overriding the API base URL (set on GitHub Enterprise runners)
pub const API_URL_ENV_VAR: &str = "GITHUB_API_URL";

/// Credentials attached to GitHub API requests
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// `user:password` pair, sent as HTTP Basic auth
    Basic { username: String, password: String },
    /// Personal access token, sent as a Bearer token
    Bearer(String),
}

impl Credentials {
    /// Interpret a raw credential value.
    ///
    /// A value containing `:` is treated as `user:password`, anything else as a token.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((username, password)) => Credentials::Basic {
                username: username.to_string(),
                password: password.to_string(),
            },
            None => Credentials::Bearer(raw.to_string()),
        }
    }
}

// Keep secrets out of debug logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Credentials::Bearer(_) => f.debug_tuple("Bearer").field(&"***").finish(),
        }
    }
}

/// Runtime configuration for talking to GitHub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub credentials: Option<Credentials>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            credentials: None,
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        let auth_values = AUTH_ENV_VARS.map(|name| std::env::var(name).ok());
        from_env_values(&auth_values, std::env::var(API_URL_ENV_VAR).ok())
    }
}

/// Build a `Config` from already-read environment values.
///
/// `auth_values` follows the order of [`AUTH_ENV_VARS`]; the first non-empty one wins.
fn from_env_values(auth_values: &[Option<String>], api_url: Option<String>) -> Config {
    let credentials = auth_values
        .iter()
        .flatten()
        .find(|v| !v.is_empty())
        .map(|v| Credentials::parse(v));

    let api_base_url = api_url
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    Config {
        api_base_url,
        credentials,
    }
}
