mod config;
mod error;
pub mod file_loader;
mod workspace;
mod workspace_loader;

pub use config::WorkspaceConfig;
pub use error::LoadError;
pub use workspace::Workspace;
