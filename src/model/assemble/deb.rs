//! Debian packages.

use super::{Assembler, AssemblerCommon, output_directory};
use crate::model::packager::capability::DEB;
use crate::model::{Artifact, DistributionType};
use serde::{Deserialize, Serialize};

/// Maps a Debian architecture to a platform string.
fn platform_for(architecture: &str) -> &'static str {
    match architecture {
        "amd64" => "linux-x86_64",
        "i386" => "linux-x86_32",
        "arm64" => "linux-aarch_64",
        "armhf" | "armel" => "linux-arm_32",
        "ppc64el" => "linux-ppcle_64",
        "s390x" => "linux-s390_64",
        "riscv64" => "linux-riscv64",
        _ => "",
    }
}

/// Builds `<name>_<version>-<revision>_<arch>.deb`.
///
/// ```toml
/// [assemble.deb.app]
/// architecture = "arm64"
/// depends = ["libc6 (>= 2.31)"]
/// section = "utils"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebAssembler {
    #[serde(flatten)]
    pub common: AssemblerCommon,
    /// Default: None (`{{distributionName}}`)
    pub package_name: Option<String>,
    /// Default: None (`{{projectVersion}}`)
    pub package_version: Option<String>,
    /// Default: None (`1`)
    pub revision: Option<u32>,
    /// Debian architecture.
    ///
    /// Default: None (`amd64`)
    pub architecture: Option<String>,
    pub maintainer: Option<String>,
    pub section: Option<String>,
    pub priority: Option<String>,
    pub depends: Vec<String>,
    pub recommends: Vec<String>,
    pub provides: Vec<String>,
}

crate::impl_overlay!(DebAssembler {
    common,
    package_name,
    package_version,
    revision,
    architecture,
    maintainer,
    section,
    priority,
    depends,
    recommends,
    provides,
});

impl DebAssembler {
    pub fn package_name(&self) -> &str {
        self.package_name.as_deref().unwrap_or("{{distributionName}}")
    }

    pub fn package_version(&self) -> &str {
        self.package_version.as_deref().unwrap_or("{{projectVersion}}")
    }

    pub fn revision(&self) -> u32 {
        self.revision.unwrap_or(1)
    }

    pub fn architecture(&self) -> &str {
        self.architecture.as_deref().unwrap_or("amd64")
    }

    /// File name of the package.
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}-{}_{}{DEB}",
            self.package_name(),
            self.package_version(),
            self.revision(),
            self.architecture()
        )
    }
}

impl Assembler for DebAssembler {
    fn section(&self) -> &'static str {
        "deb"
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
        let path = format!("{}/{}", output_directory(self), self.file_name());
        vec![Artifact::new(path).with_platform(platform_for(self.architecture()))]
    }
}
