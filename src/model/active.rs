//! Activation rules for model elements.

use super::Project;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// When a model element takes part in a release.
///
/// Evaluated against the [`Project`] version: a version ending in
/// `-SNAPSHOT` is a snapshot, a semver version with a pre-release component
/// is a prerelease, anything else is a release.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Active {
    /// Always enabled
    #[default]
    Always,
    /// Never enabled
    Never,
    /// Final releases only
    Release,
    /// Prereleases only
    Prerelease,
    /// Releases and prereleases, not snapshots
    ReleasePrerelease,
    /// Snapshots only
    Snapshot,
}

impl Active {
    /// Evaluates the rule for `project`.
    pub fn check(&self, project: &Project) -> bool {
        let snapshot = project.is_snapshot();
        let prerelease = project.is_prerelease();
        match self {
            Active::Always => true,
            Active::Never => false,
            Active::Release => !snapshot && !prerelease,
            Active::Prerelease => prerelease,
            Active::ReleasePrerelease => !snapshot,
            Active::Snapshot => snapshot,
        }
    }

    /// Evaluates an optional rule, treating `None` as [`Active::Always`].
    pub fn resolve(active: Option<Active>, project: &Project) -> bool {
        active.unwrap_or_default().check(project)
    }
}

impl fmt::Display for Active {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Active::Always => "ALWAYS",
            Active::Never => "NEVER",
            Active::Release => "RELEASE",
            Active::Prerelease => "PRERELEASE",
            Active::ReleasePrerelease => "RELEASE_PRERELEASE",
            Active::Snapshot => "SNAPSHOT",
        })
    }
}

impl FromStr for Active {
    type Err = super::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "ALWAYS" => Ok(Active::Always),
            "NEVER" => Ok(Active::Never),
            "RELEASE" => Ok(Active::Release),
            "PRERELEASE" => Ok(Active::Prerelease),
            "RELEASE_PRERELEASE" => Ok(Active::ReleasePrerelease),
            "SNAPSHOT" => Ok(Active::Snapshot),
            other => Err(super::Error::GenericError(format!(
                "invalid active value: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(version: &str) -> Project {
        Project::new("app", version)
    }

    #[test]
    fn release_rules() {
        let release = project("1.2.3");
        assert!(Active::Always.check(&release));
        assert!(!Active::Never.check(&release));
        assert!(Active::Release.check(&release));
        assert!(!Active::Prerelease.check(&release));
        assert!(Active::ReleasePrerelease.check(&release));
        assert!(!Active::Snapshot.check(&release));
    }

    #[test]
    fn prerelease_rules() {
        let pre = project("2.0.0-rc.1");
        assert!(!Active::Release.check(&pre));
        assert!(Active::Prerelease.check(&pre));
        assert!(Active::ReleasePrerelease.check(&pre));
    }

    #[test]
    fn snapshot_rules() {
        let snap = project("2.0.0-SNAPSHOT");
        assert!(Active::Snapshot.check(&snap));
        assert!(!Active::Prerelease.check(&snap));
        assert!(!Active::ReleasePrerelease.check(&snap));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            "release-prerelease".parse::<Active>().unwrap(),
            Active::ReleasePrerelease
        );
        assert!("sometimes".parse::<Active>().is_err());
    }
}
