//! Platform installers built with jpackage.

use super::{Assembler, AssemblerCommon, output_directory};
use crate::model::platform::{Os, Platform};
use crate::model::{Artifact, DistributionType};
use serde::{Deserialize, Serialize};

/// Installer types jpackage builds on each OS when none are listed.
fn default_types(os: Os) -> &'static [&'static str] {
    match os {
        Os::Osx => &["dmg", "pkg"],
        Os::Windows => &["exe", "msi"],
        Os::Linux | Os::LinuxMusl => &["deb", "rpm"],
        _ => &[],
    }
}

/// A platform to build installers for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JpackageTarget {
    pub platform: String,
    /// Installer types, e.g. `dmg` or `msi`.
    ///
    /// Default: empty (the OS defaults)
    pub types: Vec<String>,
    /// Runtime image to bundle.
    pub runtime_image: Option<String>,
}

impl JpackageTarget {
    /// Installer types, falling back to the OS defaults.
    pub fn types(&self) -> Vec<String> {
        if !self.types.is_empty() {
            return self.types.iter().map(|t| t.trim().to_ascii_lowercase()).collect();
        }
        default_types(Platform::parse(&self.platform).os())
            .iter()
            .map(|t| t.to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JpackageAssembler {
    #[serde(flatten)]
    pub common: AssemblerCommon,
    /// Default: None (`{{distributionName}}`)
    pub application_name: Option<String>,
    /// Default: None (`{{projectVersion}}`)
    pub app_version: Option<String>,
    pub vendor: Option<String>,
    pub targets: Vec<JpackageTarget>,
}

crate::impl_overlay!(JpackageAssembler {
    common,
    application_name,
    app_version,
    vendor,
    targets,
});

impl JpackageAssembler {
    pub fn application_name(&self) -> &str {
        self.application_name
            .as_deref()
            .unwrap_or("{{distributionName}}")
    }

    pub fn app_version(&self) -> &str {
        self.app_version.as_deref().unwrap_or("{{projectVersion}}")
    }
}

impl Assembler for JpackageAssembler {
    fn section(&self) -> &'static str {
        "jpackage"
    }

    fn common(&self) -> &AssemblerCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut AssemblerCommon {
        &mut self.common
    }

    fn distribution_type(&self) -> DistributionType {
        DistributionType::NativePackage
    }

    fn outputs(&self) -> Vec<Artifact> {
        let directory = output_directory(self);
        let mut outputs = Vec::new();
        for target in &self.targets {
            let types = target.types();
            if types.is_empty() {
                log::warn!(
                    "jpackage {}: no installer types for platform {:?}",
                    self.name(),
                    target.platform
                );
            }
            for kind in types {
                outputs.push(
                    Artifact::new(format!(
                        "{directory}/{}-{}-{}.{kind}",
                        self.application_name(),
                        self.app_version(),
                        target.platform
                    ))
                    .with_platform(target.platform.as_str()),
                );
            }
        }
        outputs
    }
}
