//! MacPorts portfiles.

use super::capability::{self, CapabilityTable, ZIP};
use super::{Packager, PackagerCommon, PackagerKind, Repository, packager_common};
use crate::model::{DistributionType, platform};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const ARCHIVES: &[&str] = &[ZIP];

static SUPPORTED: LazyLock<CapabilityTable> = LazyLock::new(|| {
    capability::table(&[
        (DistributionType::Binary, ARCHIVES),
        (DistributionType::JavaBinary, ARCHIVES),
        (DistributionType::Jlink, ARCHIVES),
        (DistributionType::NativeImage, ARCHIVES),
    ])
});

/// MacPorts packager. Accepts Intel macOS artifacts only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MacportsPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    pub package_name: Option<String>,
    /// Port revision.
    ///
    /// Default: None (`0`)
    pub revision: Option<u32>,
    pub categories: Vec<String>,
    pub maintainers: Vec<String>,
    pub repository: Repository,
}

crate::impl_overlay!(MacportsPackager {
    common,
    package_name,
    revision,
    categories,
    maintainers,
    repository,
});

impl MacportsPackager {
    /// Port revision.
    pub fn revision(&self) -> u32 {
        self.revision.unwrap_or(0)
    }
}

impl Packager for MacportsPackager {
    packager_common!(PackagerKind::Macports);

    fn supports_platform(&self, platform: &str) -> bool {
        platform.trim().is_empty() || (platform::is_mac(platform) && platform::is_intel(platform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intel_mac_only() {
        let macports = MacportsPackager::default();
        assert!(macports.supports_platform("osx-x86_64"));
        assert!(!macports.supports_platform("osx-aarch_64"));
        assert!(!macports.supports_platform("linux-x86_64"));
        assert_eq!(macports.revision(), 0);
    }
}
