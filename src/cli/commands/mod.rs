//! Command execution for the `select` and `show` subcommands.

mod select;
mod show;

pub use select::{SelectOptions, select};
pub use show::show;

use crate::cli::RuntimeConfig;
use crate::config::LoadedConfig;
use crate::error::Result;
use crate::model::{Context, ContextBuilder};
use path_absolutize::Absolutize;

/// Build the run context for a loaded configuration.
pub fn build_context(loaded: &LoadedConfig, runtime: &RuntimeConfig) -> Result<Context> {
    let base_dir = loaded.base_dir.absolutize()?;
    let context = ContextBuilder::new()
        .base_dir(base_dir.as_ref())
        .dry_run(runtime.dry_run())
        .project(loaded.model.project())
        .selected_platforms(runtime.selected_platforms().to_vec())
        .rejected_platforms(runtime.rejected_platforms().to_vec())
        .build()?;
    Ok(context)
}
