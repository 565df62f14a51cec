//! Registry implementations for fetching action tags

pub mod github;

pub use github::GitHubRegistry;
