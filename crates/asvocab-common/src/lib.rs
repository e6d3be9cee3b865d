pub mod config;
pub mod document;
pub mod vfs;

pub type Result<T> = anyhow::Result<T>;
