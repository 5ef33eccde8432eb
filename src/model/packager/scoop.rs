//! Scoop manifests for Windows.

use super::capability::{self, CapabilityTable, FLAT, MSI, ZIP};
use super::{Packager, PackagerCommon, PackagerKind, Repository, packager_common};
use crate::model::{DistributionType, platform};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const ARCHIVES: &[&str] = &[ZIP];
const INSTALLERS: &[&str] = &[MSI];

static SUPPORTED: LazyLock<CapabilityTable> = LazyLock::new(|| {
    capability::table(&[
        (DistributionType::Binary, ARCHIVES),
        (DistributionType::JavaBinary, ARCHIVES),
        (DistributionType::Jlink, ARCHIVES),
        (DistributionType::NativeImage, ARCHIVES),
        (DistributionType::NativePackage, INSTALLERS),
        (DistributionType::FlatBinary, FLAT),
    ])
});

/// Scoop packager. Accepts Windows artifacts of any architecture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoopPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    /// Manifest name.
    pub package_name: Option<String>,
    /// URL checked for new versions.
    pub checkver_url: Option<String>,
    /// URL template used by autoupdate.
    pub autoupdate_url: Option<String>,
    /// Bucket repository.
    pub repository: Repository,
}

crate::impl_overlay!(ScoopPackager {
    common,
    package_name,
    checkver_url,
    autoupdate_url,
    repository,
});

impl Packager for ScoopPackager {
    packager_common!(PackagerKind::Scoop);

    fn supports_platform(&self, platform: &str) -> bool {
        platform.trim().is_empty() || platform::is_windows(platform)
    }
}
