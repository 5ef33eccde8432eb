//! Project metadata shared by every assembler and packager.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Suffix that marks a snapshot version.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Project metadata.
///
/// Maps the `[project]` table of the release configuration.
///
/// ```toml
/// [project]
/// name = "app"
/// version = "1.0.0"
/// description = "Awesome app"
/// authors = ["Duke"]
/// license = "Apache-2.0"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    name: String,
    version: String,
    description: Option<String>,
    long_description: Option<String>,
    website: Option<String>,
    license: Option<String>,
    copyright: Option<String>,
    vendor: Option<String>,
    authors: Vec<String>,
    extra_properties: BTreeMap<String, Value>,
}

crate::impl_overlay!(Project {
    name,
    version,
    description,
    long_description,
    website,
    license,
    copyright,
    vendor,
    authors,
    extra_properties,
});

impl Project {
    /// Creates a project with a name and version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Sets the description. Returns self for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the authors. Returns self for chaining.
    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version string as configured.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Short description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Project license identifier.
    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    /// Project authors.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Extra properties.
    pub fn extra_properties(&self) -> &BTreeMap<String, Value> {
        &self.extra_properties
    }

    /// Whether the version is a snapshot.
    pub fn is_snapshot(&self) -> bool {
        self.version.ends_with(SNAPSHOT_SUFFIX)
    }

    /// Whether the version is a semver prerelease (snapshots excluded).
    pub fn is_prerelease(&self) -> bool {
        !self.is_snapshot()
            && semver::Version::parse(&self.version)
                .map(|v| !v.pre.is_empty())
                .unwrap_or(false)
    }

    /// Template properties describing the project.
    ///
    /// Extra properties are exposed as `project` + capitalized key.
    pub fn props(&self) -> BTreeMap<String, Value> {
        let mut props = BTreeMap::new();
        props.insert("projectName".into(), Value::from(self.name.as_str()));
        props.insert("projectVersion".into(), Value::from(self.version.as_str()));
        props.insert(
            "projectEffectiveVersion".into(),
            Value::from(if self.is_snapshot() {
                "early-access"
            } else {
                self.version.as_str()
            }),
        );
        props.insert("projectSnapshot".into(), Value::from(self.is_snapshot()));

        if let Ok(version) = semver::Version::parse(&self.version) {
            props.insert("projectVersionMajor".into(), Value::from(version.major));
            props.insert("projectVersionMinor".into(), Value::from(version.minor));
            props.insert("projectVersionPatch".into(), Value::from(version.patch));
            if !version.pre.is_empty() {
                props.insert(
                    "projectVersionPrerelease".into(),
                    Value::from(version.pre.as_str()),
                );
            }
        }

        let optional = [
            ("projectDescription", &self.description),
            ("projectLongDescription", &self.long_description),
            ("projectWebsite", &self.website),
            ("projectLicense", &self.license),
            ("projectCopyright", &self.copyright),
            ("projectVendor", &self.vendor),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                props.insert(key.into(), Value::from(value.as_str()));
            }
        }

        if !self.authors.is_empty() {
            props.insert(
                "projectAuthorsBySpace".into(),
                Value::from(self.authors.join(" ")),
            );
            props.insert(
                "projectAuthorsByComma".into(),
                Value::from(self.authors.join(",")),
            );
        }

        for (key, value) in &self.extra_properties {
            props.insert(format!("project{}", capitalize(key)), value.clone());
        }

        props
    }
}

/// Uppercases the first character of `value`.
pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_detection() {
        assert!(Project::new("app", "1.0.0-SNAPSHOT").is_snapshot());
        assert!(!Project::new("app", "1.0.0").is_snapshot());
    }

    #[test]
    fn prerelease_requires_semver_pre() {
        assert!(Project::new("app", "1.0.0-beta.2").is_prerelease());
        assert!(!Project::new("app", "1.0.0").is_prerelease());
        assert!(!Project::new("app", "1.0.0-SNAPSHOT").is_prerelease());
        assert!(!Project::new("app", "not-a-version").is_prerelease());
    }

    #[test]
    fn props_include_version_parts_and_extras() {
        let mut project = Project::new("app", "1.4.2")
            .with_description("demo")
            .with_authors(vec!["a".into(), "b".into()]);
        project
            .extra_properties
            .insert("slogan".into(), Value::from("fast"));

        let props = project.props();
        assert_eq!(props["projectName"], "app");
        assert_eq!(props["projectVersionMajor"], 1);
        assert_eq!(props["projectVersionPatch"], 2);
        assert_eq!(props["projectDescription"], "demo");
        assert_eq!(props["projectAuthorsByComma"], "a,b");
        assert_eq!(props["projectSlogan"], "fast");
        assert!(!props.contains_key("projectVersionPrerelease"));
    }

    #[test]
    fn snapshot_effective_version() {
        let props = Project::new("app", "2.0.0-SNAPSHOT").props();
        assert_eq!(props["projectEffectiveVersion"], "early-access");
        assert_eq!(props["projectSnapshot"], true);
    }

    #[test]
    fn capitalize_first_char() {
        assert_eq!(capitalize("brew"), "Brew");
        assert_eq!(capitalize(""), "");
    }
}
