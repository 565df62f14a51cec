//! Shared test utilities

#![allow(dead_code)]

pub mod registry;

pub use registry::{MockRegistry, create_test_updater};
