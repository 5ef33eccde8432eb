//! Print the artifacts a packager selects.

use super::build_context;
use crate::cli::RuntimeConfig;
use crate::config::LoadedConfig;
use crate::error::{CliError, Result};
use crate::model::{Algorithm, PackagerKind, Selection, checksum};
use std::io::Write;

/// Options of the `select` subcommand.
#[derive(Debug)]
pub struct SelectOptions<'a> {
    pub packager: &'a str,
    pub distribution: &'a str,
    pub candidates: bool,
    pub checksum: Option<&'a str>,
}

/// Writes one resolved path per line to `out`, optionally prefixed with a
/// checksum in `sha256sum` layout.
pub async fn select<W: Write>(
    loaded: &mut LoadedConfig,
    runtime: &RuntimeConfig,
    options: &SelectOptions<'_>,
    out: &mut W,
) -> Result<i32> {
    let kind: PackagerKind = options.packager.parse()?;
    let algorithm = options
        .checksum
        .map(str::parse::<Algorithm>)
        .transpose()?;
    let selection = if options.candidates {
        Selection::Candidates
    } else {
        Selection::Existing
    };

    let context = build_context(loaded, runtime)?;
    loaded.model.prepare(&context);

    let model = &loaded.model;
    let distribution = model.distribution(options.distribution)?;
    let artifacts = model.select(&context, kind, options.distribution, selection)?;
    log::info!(
        "{} selected {} artifact(s) from {}",
        kind,
        artifacts.len(),
        distribution.name()
    );

    for artifact in artifacts {
        let path = artifact.resolved_path(&context, distribution);
        match algorithm {
            Some(algorithm) => {
                if !path.exists() {
                    return Err(CliError::ExecutionFailed {
                        command: "checksum".to_string(),
                        reason: format!("{} does not exist", path.display()),
                    }
                    .into());
                }
                let digest = checksum(&path, algorithm).await?;
                writeln!(out, "{digest}  {}", path.display())?;
            }
            None => writeln!(out, "{}", path.display())?,
        }
    }

    Ok(0)
}
