//! Distributions and their types.

use super::{Active, Artifact, Error, Packagers, Project};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Kind of payload a distribution carries.
///
/// Decides which file extensions a packager accepts for the distribution's
/// artifacts.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistributionType {
    /// Platform-specific binary in an archive
    Binary,
    /// Java application with launcher scripts in an archive
    #[default]
    JavaBinary,
    /// Custom Java runtime image
    Jlink,
    /// GraalVM native image
    NativeImage,
    /// Platform installer (.dmg, .msi, .deb, ...)
    NativePackage,
    /// Executable uber jar
    SingleJar,
    /// Bare executable with no archive wrapper
    FlatBinary,
}

impl DistributionType {
    /// All distribution types.
    pub const ALL: [DistributionType; 7] = [
        DistributionType::Binary,
        DistributionType::JavaBinary,
        DistributionType::Jlink,
        DistributionType::NativeImage,
        DistributionType::NativePackage,
        DistributionType::SingleJar,
        DistributionType::FlatBinary,
    ];

    /// Configuration name, e.g. `NATIVE_IMAGE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionType::Binary => "BINARY",
            DistributionType::JavaBinary => "JAVA_BINARY",
            DistributionType::Jlink => "JLINK",
            DistributionType::NativeImage => "NATIVE_IMAGE",
            DistributionType::NativePackage => "NATIVE_PACKAGE",
            DistributionType::SingleJar => "SINGLE_JAR",
            DistributionType::FlatBinary => "FLAT_BINARY",
        }
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        DistributionType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| Error::UnknownDistributionType(s.to_string()))
    }
}

/// A named set of artifacts published together.
///
/// The distribution type is fixed at construction. Per-distribution packager
/// sections override the global `[packagers]` defaults.
///
/// ```toml
/// [distributions.app]
/// type = "JAVA_BINARY"
///
/// [[distributions.app.artifacts]]
/// path = "build/{{distributionName}}-{{projectVersion}}.zip"
///
/// [distributions.app.brew]
/// multiPlatform = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Distribution {
    #[serde(skip)]
    name: String,
    #[serde(rename = "type")]
    distribution_type: DistributionType,
    active: Option<Active>,
    executable: Option<String>,
    artifacts: Vec<Artifact>,
    extra_properties: BTreeMap<String, Value>,
    #[serde(flatten)]
    packagers: Packagers,
}

impl Distribution {
    /// Creates a distribution with its artifacts.
    pub fn new(
        name: impl Into<String>,
        distribution_type: DistributionType,
        artifacts: Vec<Artifact>,
    ) -> Self {
        Self {
            name: name.into(),
            distribution_type,
            artifacts,
            ..Default::default()
        }
    }

    /// Sets per-distribution packager overrides. Returns self for chaining.
    pub fn with_packagers(mut self, packagers: Packagers) -> Self {
        self.packagers = packagers;
        self
    }

    /// Sets the executable name. Returns self for chaining.
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = Some(executable.into());
        self
    }

    /// Distribution name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distribution type.
    pub fn distribution_type(&self) -> DistributionType {
        self.distribution_type
    }

    /// Activation rule.
    pub fn active(&self) -> Option<Active> {
        self.active
    }

    /// Whether the distribution is enabled for `project`.
    pub fn is_enabled(&self, project: &Project) -> bool {
        Active::resolve(self.active, project)
    }

    /// Executable name, defaulting to the distribution name.
    pub fn executable(&self) -> &str {
        self.executable.as_deref().unwrap_or(&self.name)
    }

    /// Artifacts in declaration order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Extra properties.
    pub fn extra_properties(&self) -> &BTreeMap<String, Value> {
        &self.extra_properties
    }

    /// Per-distribution packager overrides.
    pub fn packagers(&self) -> &Packagers {
        &self.packagers
    }

    /// Template properties describing the distribution.
    pub fn props(&self) -> BTreeMap<String, Value> {
        let mut props = BTreeMap::new();
        props.insert("distributionName".into(), Value::from(self.name.as_str()));
        props.insert(
            "distributionType".into(),
            Value::from(self.distribution_type.as_str()),
        );
        props.insert(
            "distributionExecutable".into(),
            Value::from(self.executable()),
        );
        for (key, value) in &self.extra_properties {
            props.insert(
                format!("distribution{}", super::project::capitalize(key)),
                value.clone(),
            );
        }
        props
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub(crate) fn artifacts_mut(&mut self) -> &mut [Artifact] {
        &mut self.artifacts
    }
}
