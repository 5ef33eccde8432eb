//! Command line interface for release_model.
//!
//! Parses arguments, locates and loads the configuration, then dispatches
//! to the subcommand.

mod args;
pub mod commands;

pub use args::{Args, Command, RuntimeConfig};
pub use commands::SelectOptions;

use crate::config;
use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    let runtime = RuntimeConfig::from(&args);

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => config::find_config(&std::env::current_dir()?).await?,
    };
    let mut loaded = config::load_model(&config_path).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &args.command {
        Command::Select {
            packager,
            distribution,
            candidates,
            checksum,
        } => {
            let options = SelectOptions {
                packager,
                distribution,
                candidates: *candidates,
                checksum: checksum.as_deref(),
            };
            commands::select(&mut loaded, &runtime, &options, &mut out).await
        }
        Command::Show { full } => commands::show(&loaded, *full, &mut out),
    }
}
