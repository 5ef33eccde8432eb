//! Release model library for assembling distributions and selecting the
//! artifacts each packager publishes.
//!
//! This library provides:
//! - The release configuration model (project, assemblers, distributions, packagers)
//! - Artifact selection per packager, filtered by platform and file extension
//! - Loading of `release.toml` files
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod config;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use error::{CliError, ReleaseError, Result};
pub use model::{Packager, ReleaseModel};
