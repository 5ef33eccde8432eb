//! Artifacts produced by assemblers and consumed by packagers.

use super::{Active, Context, Distribution, Project};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{cmp::Ordering, collections::BTreeMap, path::PathBuf};

/// A file reference attached to a distribution.
///
/// The path is a template resolved against a [`Context`] and the owning
/// [`Distribution`]. Only the enabled and selected flags change after
/// creation; both are runtime state and never read from configuration.
///
/// # Examples
///
/// ```
/// use release_model::model::Artifact;
///
/// let artifact = Artifact::new("build/app-{{projectVersion}}.zip")
///     .with_platform("osx-aarch_64")
///     .with_extra_property("skipBrew", true);
///
/// assert_eq!(artifact.platform(), "osx-aarch_64");
/// assert!(artifact.is_true("skipBrew"));
/// assert!(artifact.is_active_and_selected());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    path: String,
    #[serde(default)]
    platform: String,
    #[serde(default)]
    active: Option<Active>,
    #[serde(default)]
    extra_properties: BTreeMap<String, Value>,
    #[serde(skip, default = "enabled_by_default")]
    enabled: bool,
    #[serde(skip, default = "enabled_by_default")]
    selected: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl Artifact {
    /// Creates an enabled, selected, platform-independent artifact.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            platform: String::new(),
            active: None,
            extra_properties: BTreeMap::new(),
            enabled: true,
            selected: true,
        }
    }

    /// Sets the target platform. Returns self for chaining.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Sets the activation rule. Returns self for chaining.
    pub fn with_active(mut self, active: Active) -> Self {
        self.active = Some(active);
        self
    }

    /// Adds an extra property. Returns self for chaining.
    pub fn with_extra_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_properties.insert(key.into(), value.into());
        self
    }

    /// Path template as configured.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Target platform, empty when platform-independent.
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Extra properties such as packager skip flags.
    pub fn extra_properties(&self) -> &BTreeMap<String, Value> {
        &self.extra_properties
    }

    /// Whether the extra property `key` is `true` or the string `"true"`.
    pub fn is_true(&self, key: &str) -> bool {
        match self.extra_properties.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// Whether the artifact is enabled and passed platform selection.
    pub fn is_active_and_selected(&self) -> bool {
        self.enabled && self.selected
    }

    /// Resolves the activation rule against `project`.
    pub fn resolve_enabled(&mut self, project: &Project) {
        self.enabled = Active::resolve(self.active, project);
    }

    /// Applies platform selection.
    ///
    /// Platform-independent artifacts are always selected. Otherwise the
    /// platform must be compatible with one of `selected` (when any are
    /// given) and with none of `rejected`.
    pub fn apply_selection(&mut self, selected: &[String], rejected: &[String]) {
        if self.platform.trim().is_empty() {
            self.selected = true;
            return;
        }
        let wanted = selected.is_empty()
            || selected
                .iter()
                .any(|p| super::platform::is_compatible(p, &self.platform));
        let refused = rejected
            .iter()
            .any(|p| super::platform::is_compatible(p, &self.platform));
        self.selected = wanted && !refused;
    }

    /// Resolved filesystem path, memoized by `context`.
    pub fn resolved_path(&self, context: &Context, distribution: &Distribution) -> PathBuf {
        context.resolve_artifact_path(distribution, self)
    }

    /// Whether the resolved path exists right now.
    pub fn resolved_path_exists(&self, context: &Context, distribution: &Distribution) -> bool {
        self.resolved_path(context, distribution).exists()
    }

    /// Template properties describing the artifact.
    pub fn props(&self) -> BTreeMap<String, Value> {
        let mut props = BTreeMap::new();
        props.insert(
            "artifactPlatform".into(),
            Value::from(self.platform.as_str()),
        );
        if !self.platform.is_empty() {
            let parsed = super::Platform::parse(&self.platform);
            props.insert("artifactOs".into(), Value::from(parsed.os().as_str()));
            if let Some(arch) = parsed.arch() {
                props.insert("artifactArch".into(), Value::from(arch.as_str()));
            }
        }
        for (key, value) in &self.extra_properties {
            props.insert(
                format!("artifact{}", super::project::capitalize(key)),
                value.clone(),
            );
        }
        props
    }

    /// Orders artifacts by platform.
    ///
    /// Byte-wise, case-sensitive comparison of the platform strings, so
    /// platform-independent artifacts come first.
    pub fn compare_by_platform(a: &Artifact, b: &Artifact) -> Ordering {
        a.platform.as_bytes().cmp(b.platform.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_flag_accepts_bool_and_string() {
        let artifact = Artifact::new("a.zip")
            .with_extra_property("skipBrew", true)
            .with_extra_property("skipDocker", "TRUE")
            .with_extra_property("skipSnap", "no");
        assert!(artifact.is_true("skipBrew"));
        assert!(artifact.is_true("skipDocker"));
        assert!(!artifact.is_true("skipSnap"));
        assert!(!artifact.is_true("skipScoop"));
    }

    #[test]
    fn platform_comparator_puts_blank_first() {
        let blank = Artifact::new("c.zip");
        let linux = Artifact::new("a.zip").with_platform("linux-x86_64");
        let mac = Artifact::new("b.zip").with_platform("osx-x86_64");
        assert_eq!(Artifact::compare_by_platform(&blank, &linux), Ordering::Less);
        assert_eq!(Artifact::compare_by_platform(&linux, &mac), Ordering::Less);
        assert_eq!(Artifact::compare_by_platform(&mac, &mac), Ordering::Equal);
    }

    #[test]
    fn selection_keeps_platform_independent_artifacts() {
        let mut artifact = Artifact::new("a.jar");
        artifact.apply_selection(&["osx".into()], &[]);
        assert!(artifact.is_active_and_selected());
    }

    #[test]
    fn selection_filters_by_platform() {
        let mut linux = Artifact::new("a.zip").with_platform("linux-x86_64");
        linux.apply_selection(&["osx".into()], &[]);
        assert!(!linux.is_active_and_selected());

        let mut mac = Artifact::new("b.zip").with_platform("osx-aarch_64");
        mac.apply_selection(&["osx".into()], &["osx-aarch_64".into()]);
        assert!(!mac.is_active_and_selected());

        mac.apply_selection(&[], &[]);
        assert!(mac.is_active_and_selected());
    }

    #[test]
    fn resolve_enabled_uses_project() {
        let mut artifact = Artifact::new("a.zip").with_active(Active::Snapshot);
        artifact.resolve_enabled(&Project::new("app", "1.0.0"));
        assert!(!artifact.is_active_and_selected());
        artifact.resolve_enabled(&Project::new("app", "1.0.0-SNAPSHOT"));
        assert!(artifact.is_active_and_selected());
    }

    #[test]
    fn props_expose_platform_parts() {
        let props = Artifact::new("a.zip")
            .with_platform("linux-aarch_64")
            .props();
        assert_eq!(props["artifactOs"], "linux");
        assert_eq!(props["artifactArch"], "aarch_64");
    }

    #[test]
    fn deserialized_artifacts_start_enabled() {
        let artifact: Artifact = toml::from_str(r#"path = "a.zip""#).unwrap();
        assert!(artifact.is_active_and_selected());
        assert_eq!(artifact.platform(), "");
    }
}
