//! Release model loading from `release.toml`.
//!
//! The file is read once, parsed with `toml` into a
//! [`ReleaseModel`], then finalized so distributions carry their names and
//! assembler outputs are folded in.

use crate::error::{CliError, ReleaseError, Result};
use crate::model::ReleaseModel;
use std::path::{Path, PathBuf};

/// Conventional configuration file name.
pub const CONFIG_FILE: &str = "release.toml";

/// A loaded model together with where it came from.
#[derive(Debug)]
pub struct LoadedConfig {
    /// Finalized release model
    pub model: ReleaseModel,

    /// Path of the configuration file
    pub path: PathBuf,

    /// Directory artifact paths resolve against
    pub base_dir: PathBuf,
}

/// Load and finalize the release model at `config_path`.
///
/// The base directory is the directory containing the file.
pub async fn load_model(config_path: &Path) -> Result<LoadedConfig> {
    let source = tokio::fs::read_to_string(config_path).await.map_err(|e| {
        ReleaseError::Cli(CliError::ExecutionFailed {
            command: "read_config".to_string(),
            reason: format!("Failed to read {}: {}", config_path.display(), e),
        })
    })?;

    let model = parse_model(&source)?;

    let base_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from("."));

    log::debug!(
        "loaded {} with {} distribution(s)",
        config_path.display(),
        model.distributions().len()
    );

    Ok(LoadedConfig {
        model,
        path: config_path.to_path_buf(),
        base_dir,
    })
}

/// Parse and finalize a release model from TOML source.
pub fn parse_model(source: &str) -> Result<ReleaseModel> {
    let mut model: ReleaseModel = toml::from_str(source)?;
    model.finalize();
    Ok(model)
}

/// Find [`CONFIG_FILE`] in `start` or the nearest parent directory.
pub async fn find_config(start: &Path) -> Result<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(CONFIG_FILE);
        if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            log::debug!("using {}", candidate.display());
            return Ok(candidate);
        }
        current = dir.parent();
    }

    Err(CliError::ConfigNotFound {
        file_name: CONFIG_FILE.to_string(),
        start: start.to_path_buf(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DistributionType;

    const SAMPLE: &str = r#"
        [project]
        name = "app"
        version = "1.2.0"

        [distributions.app]
        type = "JAVA_BINARY"

        [[distributions.app.artifacts]]
        path = "build/app-{{projectVersion}}.zip"
    "#;

    #[test]
    fn parse_sets_names() {
        let model = parse_model(SAMPLE).unwrap();
        let app = model.distribution("app").unwrap();
        assert_eq!(app.name(), "app");
        assert_eq!(app.distribution_type(), DistributionType::JavaBinary);
        assert_eq!(model.project().version(), "1.2.0");
    }

    #[test]
    fn parse_rejects_unknown_type() {
        let err = parse_model("[distributions.app]\ntype = \"WHEEL\"\n").unwrap_err();
        assert!(matches!(err, ReleaseError::Toml(_)));
    }

    #[tokio::test]
    async fn load_uses_file_directory_as_base() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let loaded = load_model(&path).await.unwrap();
        assert_eq!(loaded.base_dir, dir.path());
        assert_eq!(loaded.path, path);
    }

    #[tokio::test]
    async fn find_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        tokio::fs::create_dir_all(&nested).await.unwrap();
        tokio::fs::write(dir.path().join(CONFIG_FILE), SAMPLE)
            .await
            .unwrap();

        let found = find_config(&nested).await.unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_model(&dir.path().join(CONFIG_FILE)).await.unwrap_err();
        assert!(err.to_string().contains("read_config"));
    }
}
