pub mod config;
pub mod files;
pub mod parser;
pub mod update;
pub mod version;
