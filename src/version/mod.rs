//! Version lookup layer for GitHub Actions
//!
//! Fetches the tag listing of an action repository, caches it for the run,
//! and picks the tag an action reference should move to.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│    Cache    │◀────│  Strategy   │
//! │  (fetch)    │     │  (memoize)  │     │  (select)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ Registries  │
//! │  (github)   │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: In-memory tag cache, one fetch per repository
//! - [`strategy`]: `major` / `specific` version selection
//! - [`registry`]: Registry trait for fetching tags from remote sources
//! - [`registries`]: Concrete registry implementations (GitHub)
//! - [`error`]: Error types for registry and lookup operations
//! - [`types`]: Tag catalog types like `ActionVersions`

pub mod cache;
pub mod error;
pub mod registries;
pub mod registry;
pub mod strategy;
pub mod types;
