//! Release model: projects, assemblers, distributions, artifacts and packagers.
//!
//! The model is loaded from configuration, finalized, then prepared against a
//! [`Context`]. Packagers decide which artifacts they publish through the
//! [`packager::selector`].
//!
//! # Module Organization
//!
//! - [`project`] - Project metadata and version properties
//! - [`active`] - Activation rules
//! - [`artifact`] / [`distribution`] - Produced files and their grouping
//! - [`assemble`] - Assemblers contributing distributions
//! - [`packager`] - Publishing channels and artifact selection
//! - [`context`] - Per-run state and memoized path resolution
//! - [`release`] - The root configuration graph
//! - [`overlay`] / [`structured`] - Layered merging and map rendering
//! - [`checksum`] - Artifact digests
//! - [`error`] - Error types

pub mod active;
pub mod artifact;
pub mod assemble;
pub mod checksum;
pub mod context;
pub mod distribution;
pub mod error;
pub mod overlay;
pub mod packager;
pub mod platform;
pub mod project;
pub mod release;
pub mod structured;
pub mod template;

pub use active::Active;
pub use artifact::Artifact;
pub use assemble::{Assemble, Assembler, AssemblerCommon};
pub use checksum::{Algorithm, checksum};
pub use context::{Context, ContextBuilder};
pub use distribution::{Distribution, DistributionType};
pub use error::{Error, Result};
pub use overlay::Overlay;
pub use packager::{Packager, PackagerCommon, PackagerKind, Packagers};
pub use platform::{Arch, Os, Platform};
pub use project::Project;
pub use release::{ReleaseModel, Selection};
pub use structured::as_map;
pub use template::TemplateEngine;
