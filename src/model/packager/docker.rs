//! Docker images built from distribution artifacts.

use super::capability::{self, ARCHIVES, CapabilityTable, FLAT, JAR};
use super::{Packager, PackagerCommon, PackagerKind, packager_common};
use crate::model::{Active, Artifact, Context, Distribution, DistributionType, Project, platform};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, sync::LazyLock};

const SINGLE_JARS: &[&str] = &[JAR];

static SUPPORTED: LazyLock<CapabilityTable> = LazyLock::new(|| {
    capability::table(&[
        (DistributionType::Binary, ARCHIVES),
        (DistributionType::JavaBinary, ARCHIVES),
        (DistributionType::Jlink, ARCHIVES),
        (DistributionType::NativeImage, ARCHIVES),
        (DistributionType::SingleJar, SINGLE_JARS),
        (DistributionType::FlatBinary, FLAT),
    ])
});

/// Image name used when none is configured.
pub const DEFAULT_IMAGE_NAME: &str = "{{distributionName}}:{{projectVersion}}";

/// A container registry images are pushed to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Registry {
    /// Logical registry name.
    pub server_name: Option<String>,
    /// Registry host.
    pub server: Option<String>,
    /// Repository namespace on the registry.
    pub repository_name: Option<String>,
    /// Login user.
    pub username: Option<String>,
    /// Login password.
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

/// `docker buildx` settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Buildx {
    /// Build with buildx.
    pub enabled: Option<bool>,
    /// Create a dedicated builder before building.
    pub create_builder: Option<bool>,
    /// Flags passed to `docker buildx create`.
    pub create_builder_flags: Vec<String>,
    /// Target platforms, e.g. `linux/amd64`.
    pub platforms: Vec<String>,
}

crate::impl_overlay!(Buildx {
    enabled,
    create_builder,
    create_builder_flags,
    platforms,
});

/// Image settings shared by the packager and its specs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DockerConfiguration {
    /// Base image.
    pub base_image: Option<String>,
    /// Image name templates.
    pub image_names: Vec<String>,
    /// Image labels.
    pub labels: BTreeMap<String, String>,
    /// `--build-arg` values.
    pub build_args: Vec<String>,
    /// Dockerfile lines before the artifact is added.
    pub pre_commands: Vec<String>,
    /// Dockerfile lines after the artifact is added.
    pub post_commands: Vec<String>,
    /// Registries to push to.
    pub registries: Vec<Registry>,
    /// Copy the local artifact instead of downloading it.
    ///
    /// Default: None (`true`)
    pub use_local_artifact: Option<bool>,
    /// buildx settings.
    pub buildx: Buildx,
}

crate::impl_overlay!(DockerConfiguration {
    base_image,
    image_names,
    labels,
    build_args,
    pre_commands,
    post_commands,
    registries,
    use_local_artifact,
    buildx,
});

impl DockerConfiguration {
    /// Configured image names, or [`DEFAULT_IMAGE_NAME`].
    pub fn image_names(&self) -> Vec<&str> {
        if self.image_names.is_empty() {
            vec![DEFAULT_IMAGE_NAME]
        } else {
            self.image_names.iter().map(String::as_str).collect()
        }
    }

    /// Whether the local artifact is copied into the image.
    pub fn use_local_artifact(&self) -> bool {
        self.use_local_artifact.unwrap_or(true)
    }
}

/// An extra image built from the subset of artifacts its matchers accept.
///
/// ```toml
/// [packagers.docker.specs.slim]
/// baseImage = "alpine:3"
/// matchers = { platform = "linux_musl", variant = "slim" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DockerSpec {
    /// Activation rule.
    pub active: Option<Active>,
    #[serde(flatten)]
    pub config: DockerConfiguration,
    /// Artifact matchers: `platform`, or any extra property name.
    pub matchers: BTreeMap<String, Value>,
}

crate::impl_overlay!(DockerSpec {
    active,
    config,
    matchers,
});

impl DockerSpec {
    /// Whether this docker spec is enabled for `project`.
    pub fn is_enabled(&self, project: &Project) -> bool {
        Active::resolve(self.active, project)
    }

    /// Whether every matcher accepts `artifact`. A spec without matchers
    /// matches nothing.
    pub fn matches(&self, artifact: &Artifact) -> bool {
        matches_artifact(&self.matchers, artifact)
    }
}

/// Evaluates artifact matchers.
///
/// The `platform` key is checked with [`platform::is_compatible`]; any other
/// key is compared, as a string, with the artifact's extra property.
pub(crate) fn matches_artifact(matchers: &BTreeMap<String, Value>, artifact: &Artifact) -> bool {
    if matchers.is_empty() {
        return false;
    }
    matchers.iter().all(|(key, expected)| {
        let expected = value_as_string(expected);
        if key == "platform" {
            platform::is_compatible(&expected, artifact.platform())
        } else {
            artifact
                .extra_properties()
                .get(key)
                .map(value_as_string)
                .is_some_and(|actual| actual == expected)
        }
    })
}

fn value_as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Docker packager. Accepts artifacts for any Unix platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DockerPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    #[serde(flatten)]
    pub config: DockerConfiguration,
    /// Named specs.
    pub specs: BTreeMap<String, DockerSpec>,
}

crate::impl_overlay!(DockerPackager {
    common,
    config,
    specs,
});

impl DockerPackager {
    /// On-disk artifacts `spec` applies to, in selection order.
    pub fn resolve_spec_artifacts<'a>(
        &self,
        context: &Context,
        distribution: &'a Distribution,
        spec: &DockerSpec,
    ) -> Vec<&'a Artifact> {
        self.resolve_artifacts(context, distribution)
            .into_iter()
            .filter(|artifact| spec.matches(artifact))
            .collect()
    }

    /// First on-disk artifact for each enabled spec, keyed by spec name.
    /// Specs with no matching artifact are left out.
    pub fn resolve_specs<'a>(
        &self,
        context: &Context,
        distribution: &'a Distribution,
        project: &Project,
    ) -> BTreeMap<&str, &'a Artifact> {
        self.specs
            .iter()
            .filter(|(_, spec)| spec.is_enabled(project))
            .filter_map(|(name, spec)| {
                let artifact = self
                    .resolve_spec_artifacts(context, distribution, spec)
                    .into_iter()
                    .next();
                if artifact.is_none() {
                    log::warn!(
                        "docker spec {} matched no artifact in {}",
                        name,
                        distribution.name()
                    );
                }
                artifact.map(|artifact| (name.as_str(), artifact))
            })
            .collect()
    }
}

impl Packager for DockerPackager {
    packager_common!(PackagerKind::Docker);

    fn supports_platform(&self, platform: &str) -> bool {
        platform.trim().is_empty() || platform::is_unix(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContextBuilder;

    fn spec(matchers: &[(&str, Value)]) -> DockerSpec {
        DockerSpec {
            matchers: matchers
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn unix_platforms_only() {
        let docker = DockerPackager::default();
        assert!(docker.supports_platform("linux-aarch_64"));
        assert!(docker.supports_platform("osx-x86_64"));
        assert!(docker.supports_platform("linux_musl-x86_64"));
        assert!(!docker.supports_platform("windows-x86_64"));
    }

    #[test]
    fn matchers_check_platform_and_properties() {
        let artifact = Artifact::new("a.zip")
            .with_platform("linux_musl-x86_64")
            .with_extra_property("variant", "slim")
            .with_extra_property("jdk", 17);

        assert!(spec(&[("platform", Value::from("linux_musl"))]).matches(&artifact));
        assert!(
            spec(&[("variant", Value::from("slim")), ("jdk", Value::from("17"))])
                .matches(&artifact)
        );
        assert!(!spec(&[("variant", Value::from("full"))]).matches(&artifact));
        assert!(!spec(&[("platform", Value::from("linux"))]).matches(&artifact));
        assert!(!spec(&[]).matches(&artifact));
    }

    #[test]
    fn specs_pick_first_matching_artifact_on_disk() {
        let td = tempfile::tempdir().unwrap();
        for name in ["app-linux.zip", "app-musl.zip"] {
            std::fs::write(td.path().join(name), b"zip").unwrap();
        }
        let project = Project::new("app", "1.0.0");
        let ctx = ContextBuilder::new()
            .base_dir(td.path())
            .project(&project)
            .build()
            .unwrap();
        let dist = Distribution::new(
            "app",
            DistributionType::JavaBinary,
            vec![
                Artifact::new("app-linux.zip").with_platform("linux-x86_64"),
                Artifact::new("app-musl.zip").with_platform("linux_musl-x86_64"),
                Artifact::new("app-missing.zip").with_platform("linux_musl-aarch_64"),
            ],
        );

        let mut docker = DockerPackager::default();
        docker
            .specs
            .insert("slim".into(), spec(&[("platform", Value::from("linux_musl"))]));
        docker
            .specs
            .insert("arm".into(), spec(&[("platform", Value::from("linux_musl-aarch_64"))]));

        let specs = docker.resolve_specs(&ctx, &dist, &project);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs["slim"].path(), "app-musl.zip");
    }

    #[test]
    fn default_image_name_and_local_artifact() {
        let config = DockerConfiguration::default();
        assert_eq!(config.image_names(), vec![DEFAULT_IMAGE_NAME]);
        assert!(config.use_local_artifact());
    }

    #[test]
    fn deserializes_specs_and_registries() {
        let docker: DockerPackager = toml::from_str(
            r#"
            baseImage = "eclipse-temurin:17"
            imageNames = ["acme/app:latest"]

            [[registries]]
            serverName = "DEFAULT"
            username = "duke"
            password = "secret"

            [specs.slim]
            baseImage = "alpine:3"
            matchers = { platform = "linux_musl" }
            "#,
        )
        .unwrap();
        assert_eq!(docker.config.base_image.as_deref(), Some("eclipse-temurin:17"));
        assert_eq!(docker.config.registries[0].username.as_deref(), Some("duke"));
        assert_eq!(docker.specs["slim"].config.base_image.as_deref(), Some("alpine:3"));
        assert_eq!(docker.specs["slim"].matchers["platform"], "linux_musl");

        let json = serde_json::to_string(&docker).unwrap();
        assert!(!json.contains("secret"));
    }
}
