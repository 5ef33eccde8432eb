//! Container images built with Jib.

use super::capability::{self, ARCHIVES, CapabilityTable, FLAT, JAR};
use super::docker::{Registry, matches_artifact};
use super::{Packager, PackagerCommon, PackagerKind, packager_common};
use crate::model::{Active, Artifact, DistributionType, platform};
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

/// Jib image layout format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JibFormat {
    #[default]
    Docker,
    Oci,
}

/// A Jib spec, selected by artifact matchers like a Docker spec.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JibSpec {
    pub active: Option<Active>,
    pub base_image: Option<String>,
    pub image_names: Vec<String>,
    pub matchers: BTreeMap<String, Value>,
}

crate::impl_overlay!(JibSpec {
    active,
    base_image,
    image_names,
    matchers,
});

impl JibSpec {
    /// Whether every matcher accepts `artifact`.
    pub fn matches(&self, artifact: &Artifact) -> bool {
        matches_artifact(&self.matchers, artifact)
    }
}

/// Jib packager. Accepts artifacts for any Unix platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JibPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    pub version: Option<String>,
    pub base_image: Option<String>,
    pub creation_time: Option<String>,
    pub format: Option<JibFormat>,
    pub image_names: Vec<String>,
    pub environment: BTreeMap<String, String>,
    pub exposed_ports: Vec<String>,
    pub volumes: Vec<String>,
    pub working_directory: Option<String>,
    pub user: Option<String>,
    pub registries: Vec<Registry>,
    pub specs: BTreeMap<String, JibSpec>,
}

crate::impl_overlay!(JibPackager {
    common,
    version,
    base_image,
    creation_time,
    format,
    image_names,
    environment,
    exposed_ports,
    volumes,
    working_directory,
    user,
    registries,
    specs,
});

impl JibPackager {
    /// Image format, `DOCKER` unless configured.
    pub fn format(&self) -> JibFormat {
        self.format.unwrap_or_default()
    }

    /// Working directory inside the image.
    pub fn working_directory(&self) -> &str {
        self.working_directory.as_deref().unwrap_or("/workspace")
    }
}

impl Packager for JibPackager {
    packager_common!(PackagerKind::Jib);

    fn supports_platform(&self, platform: &str) -> bool {
        platform.trim().is_empty() || platform::is_unix(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_only() {
        let jib = JibPackager::default();
        assert!(jib.supports_platform("linux-x86_64"));
        assert!(!jib.supports_platform("windows-x86_64"));
        assert_eq!(jib.skip_key(), "skipJib");
    }

    #[test]
    fn defaults() {
        let jib = JibPackager::default();
        assert_eq!(jib.format(), JibFormat::Docker);
        assert_eq!(jib.working_directory(), "/workspace");
    }

    #[test]
    fn spec_matching() {
        let spec: JibSpec =
            toml::from_str(r#"matchers = { platform = "linux-aarch_64" }"#).unwrap();
        assert!(spec.matches(&Artifact::new("a.zip").with_platform("linux-arm64")));
        assert!(!spec.matches(&Artifact::new("a.zip").with_platform("linux-x86_64")));
    }

    #[test]
    fn parses_format() {
        let jib: JibPackager = toml::from_str(r#"format = "OCI""#).unwrap();
        assert_eq!(jib.format(), JibFormat::Oci);
    }
}
