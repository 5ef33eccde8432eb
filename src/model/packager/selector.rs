//! Artifact selection for packagers.
//!
//! Given a packager and a distribution, decides which artifacts the packager
//! acts on and in what order:
//!
//! 1. Artifacts must be active and selected, built for a platform the packager
//!    supports, and not carry the packager's skip flag.
//! 2. Unless the distribution is a `FLAT_BINARY`, the resolved path must end
//!    with one of the extensions the packager accepts for the distribution type.
//! 3. Results are ordered by platform (byte-wise, blank first), then by the
//!    position of the matched extension in the sorted extension list. Sorting
//!    is stable, so remaining ties keep declaration order.
//!
//! Selection never fails: an unsupported distribution type yields no
//! candidates.

use super::Packager;
use crate::model::{Artifact, Context, Distribution, DistributionType};

/// Ordered artifacts `packager` should act on for `distribution`.
pub fn resolve_candidate_artifacts<'a, P: Packager + ?Sized>(
    packager: &P,
    context: &Context,
    distribution: &'a Distribution,
) -> Vec<&'a Artifact> {
    let distribution_type = distribution.distribution_type();
    if !packager.supports_distribution(distribution_type) {
        log::debug!(
            "{} does not support {} distributions, no candidates for {}",
            packager.name(),
            distribution_type,
            distribution.name()
        );
        return Vec::new();
    }

    let eligible = distribution
        .artifacts()
        .iter()
        .filter(|artifact| is_eligible(packager, artifact));

    if distribution_type == DistributionType::FlatBinary {
        let mut candidates: Vec<&Artifact> = eligible.collect();
        candidates.sort_by(|a, b| Artifact::compare_by_platform(a, b));
        return candidates;
    }

    let extensions: Vec<&str> = packager
        .supported_file_extensions(distribution_type)
        .into_iter()
        .collect();

    let mut candidates: Vec<(usize, &Artifact)> = eligible
        .filter_map(|artifact| {
            let path = artifact.resolved_path(context, distribution);
            let path = path.to_string_lossy();
            match extensions.iter().position(|ext| path.ends_with(ext)) {
                Some(index) => Some((index, artifact)),
                None => {
                    log::debug!(
                        "{}: {} has no extension accepted for {}",
                        packager.name(),
                        path,
                        distribution_type
                    );
                    None
                }
            }
        })
        .collect();

    candidates.sort_by(|(ia, a), (ib, b)| {
        Artifact::compare_by_platform(a, b).then_with(|| ia.cmp(ib))
    });

    candidates.into_iter().map(|(_, artifact)| artifact).collect()
}

/// Candidates whose resolved path exists at call time.
pub fn resolve_artifacts<'a, P: Packager + ?Sized>(
    packager: &P,
    context: &Context,
    distribution: &'a Distribution,
) -> Vec<&'a Artifact> {
    resolve_candidate_artifacts(packager, context, distribution)
        .into_iter()
        .filter(|artifact| {
            let exists = artifact.resolved_path_exists(context, distribution);
            if !exists {
                log::debug!(
                    "{}: skipping missing artifact {}",
                    packager.name(),
                    artifact.resolved_path(context, distribution).display()
                );
            }
            exists
        })
        .collect()
}

fn is_eligible<P: Packager + ?Sized>(packager: &P, artifact: &Artifact) -> bool {
    if !artifact.is_active_and_selected() {
        return false;
    }
    if packager.is_skipped(artifact) {
        log::debug!(
            "{}: {} is flagged with {}",
            packager.name(),
            artifact.path(),
            packager.skip_key()
        );
        return false;
    }
    let platform = artifact.platform();
    platform.trim().is_empty() || packager.supports_platform(platform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::packager::{BrewPackager, ChocolateyPackager, DockerPackager, JbangPackager};
    use crate::model::{ContextBuilder, Project};
    use proptest::prelude::*;
    use std::path::Path;

    fn context(base: &Path) -> Context {
        ContextBuilder::new()
            .base_dir(base)
            .project(&Project::new("app", "1.0.0"))
            .build()
            .unwrap()
    }

    fn paths(selected: &[&Artifact]) -> Vec<String> {
        selected.iter().map(|a| a.path().to_string()).collect()
    }

    #[test]
    fn orders_by_platform_blank_first() {
        let ctx = context(Path::new("/work"));
        let dist = Distribution::new(
            "app",
            DistributionType::JavaBinary,
            vec![
                Artifact::new("a.zip").with_platform("linux-x86_64"),
                Artifact::new("b.zip").with_platform("osx-x86_64"),
                Artifact::new("c.zip"),
            ],
        );
        let docker = DockerPackager::default();
        let selected = docker.resolve_candidate_artifacts(&ctx, &dist);
        assert_eq!(paths(&selected), vec!["c.zip", "a.zip", "b.zip"]);
    }

    #[test]
    fn ties_break_on_sorted_extension_index() {
        let ctx = context(Path::new("/work"));
        let dist = Distribution::new(
            "app",
            DistributionType::NativePackage,
            vec![
                Artifact::new("app.msi").with_platform("windows-x86_64"),
                Artifact::new("app.exe").with_platform("windows-x86_64"),
            ],
        );
        let chocolatey = ChocolateyPackager::default();
        let selected = chocolatey.resolve_candidate_artifacts(&ctx, &dist);
        assert_eq!(paths(&selected), vec!["app.exe", "app.msi"]);
    }

    #[test]
    fn skip_flag_excludes_artifact() {
        let ctx = context(Path::new("/work"));
        let dist = Distribution::new(
            "app",
            DistributionType::JavaBinary,
            vec![
                Artifact::new("a.zip").with_extra_property("skipBrew", true),
                Artifact::new("b.zip").with_extra_property("skipDocker", true),
            ],
        );
        let brew = BrewPackager::default();
        assert_eq!(paths(&brew.resolve_candidate_artifacts(&ctx, &dist)), vec!["b.zip"]);
    }

    #[test]
    fn unsupported_platform_is_excluded() {
        let ctx = context(Path::new("/work"));
        let dist = Distribution::new(
            "app",
            DistributionType::Binary,
            vec![
                Artifact::new("x.zip").with_platform("osx-x86_64"),
                Artifact::new("y.zip").with_platform("linux-x86_64"),
            ],
        );
        let brew = BrewPackager::default();
        assert_eq!(paths(&brew.resolve_candidate_artifacts(&ctx, &dist)), vec!["x.zip"]);
    }

    #[test]
    fn unaccepted_extension_is_excluded() {
        let ctx = context(Path::new("/work"));
        let dist = Distribution::new(
            "app",
            DistributionType::NativeImage,
            vec![
                Artifact::new("app.tar.gz").with_platform("windows-x86_64"),
                Artifact::new("app.zip").with_platform("windows-x86_64"),
            ],
        );
        let chocolatey = ChocolateyPackager::default();
        assert_eq!(
            paths(&chocolatey.resolve_candidate_artifacts(&ctx, &dist)),
            vec!["app.zip"]
        );
    }

    #[test]
    fn flat_binary_skips_extension_filter() {
        let ctx = context(Path::new("/work"));
        let mut dist = Distribution::new(
            "app",
            DistributionType::FlatBinary,
            vec![
                Artifact::new("bin/app-mac").with_platform("osx-aarch_64"),
                Artifact::new("bin/app-linux").with_platform("linux-x86_64"),
                Artifact::new("bin/app-win.exe").with_platform("windows-x86_64"),
                Artifact::new("bin/app-musl")
                    .with_platform("linux_musl-x86_64")
                    .with_extra_property("skipDocker", true),
                Artifact::new("bin/app-arm").with_platform("linux-aarch_64"),
            ],
        );
        for artifact in dist.artifacts_mut() {
            artifact.apply_selection(&[], &["linux-aarch_64".into()]);
        }
        let docker = DockerPackager::default();
        assert_eq!(
            paths(&docker.resolve_candidate_artifacts(&ctx, &dist)),
            vec!["bin/app-linux", "bin/app-mac"]
        );
    }

    #[test]
    fn unsupported_distribution_type_yields_nothing() {
        let ctx = context(Path::new("/work"));
        let dist = Distribution::new(
            "app",
            DistributionType::FlatBinary,
            vec![Artifact::new("app")],
        );
        let jbang = JbangPackager::default();
        assert!(jbang.resolve_candidate_artifacts(&ctx, &dist).is_empty());
    }

    #[test]
    fn inactive_artifacts_are_excluded() {
        let ctx = context(Path::new("/work"));
        let mut dist = Distribution::new(
            "app",
            DistributionType::JavaBinary,
            vec![
                Artifact::new("a.zip").with_platform("linux-x86_64"),
                Artifact::new("b.zip"),
            ],
        );
        for artifact in dist.artifacts_mut() {
            artifact.apply_selection(&["osx".into()], &[]);
        }
        let docker = DockerPackager::default();
        assert_eq!(paths(&docker.resolve_candidate_artifacts(&ctx, &dist)), vec!["b.zip"]);
    }

    #[test]
    fn resolve_artifacts_keeps_existing_files_only() {
        let td = tempfile::tempdir().unwrap();
        std::fs::write(td.path().join("b.zip"), b"zip").unwrap();

        let ctx = context(td.path());
        let dist = Distribution::new(
            "app",
            DistributionType::JavaBinary,
            vec![
                Artifact::new("a.zip").with_platform("linux-x86_64"),
                Artifact::new("b.zip").with_platform("osx-x86_64"),
                Artifact::new("c.zip"),
            ],
        );
        let docker = DockerPackager::default();
        assert_eq!(docker.resolve_candidate_artifacts(&ctx, &dist).len(), 3);
        assert_eq!(paths(&docker.resolve_artifacts(&ctx, &dist)), vec!["b.zip"]);
    }

    fn artifact_strategy() -> impl Strategy<Value = Artifact> {
        (
            "[a-c]{1,3}",
            prop_oneof![
                Just(".zip"),
                Just(".tar.gz"),
                Just(".tgz"),
                Just(".jar"),
                Just(".dmg")
            ],
            prop_oneof![
                Just(""),
                Just("osx-x86_64"),
                Just("osx-aarch_64"),
                Just("linux-x86_64"),
                Just("linux_musl-x86_64"),
                Just("windows-x86_64")
            ],
            any::<bool>(),
        )
            .prop_map(|(stem, ext, platform, skip)| {
                Artifact::new(format!("{stem}{ext}"))
                    .with_platform(platform)
                    .with_extra_property("skipBrew", skip)
            })
    }

    proptest! {
        /// Property: skip-flagged artifacts never reach the candidate list
        #[test]
        fn skipped_artifacts_never_selected(
            artifacts in proptest::collection::vec(artifact_strategy(), 0..12),
            multi_platform in any::<bool>(),
        ) {
            let ctx = context(Path::new("/work"));
            let dist = Distribution::new("app", DistributionType::JavaBinary, artifacts);
            let brew = BrewPackager {
                multi_platform: Some(multi_platform),
                ..Default::default()
            };
            for artifact in brew.resolve_candidate_artifacts(&ctx, &dist) {
                prop_assert!(!artifact.is_true("skipBrew"));
                prop_assert!(
                    artifact.platform().is_empty() || brew.supports_platform(artifact.platform())
                );
            }
        }

        /// Property: selection is deterministic and sorted by platform
        #[test]
        fn selection_is_idempotent_and_sorted(
            artifacts in proptest::collection::vec(artifact_strategy(), 0..12),
        ) {
            let ctx = context(Path::new("/work"));
            let dist = Distribution::new("app", DistributionType::JavaBinary, artifacts);
            let docker = DockerPackager::default();
            let first = docker.resolve_candidate_artifacts(&ctx, &dist);
            let second = docker.resolve_candidate_artifacts(&ctx, &dist);
            prop_assert_eq!(paths(&first), paths(&second));
            for pair in first.windows(2) {
                prop_assert!(pair[0].platform() <= pair[1].platform());
            }
        }
    }
}
