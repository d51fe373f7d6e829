//! Configuration management module

pub mod loader;
pub mod repository;

pub use loader::Config;
pub use repository::RepositoryEntry;
