//! Project management: loading script files from disk into a host.

mod error;
pub mod file_loader;
pub mod workspace_loader;

pub use error::LoadError;
pub use workspace_loader::WorkspaceLoader;
