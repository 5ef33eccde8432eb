//! GoFish food recipes.

use super::capability::{self, ARCHIVES, CapabilityTable, FLAT};
use super::{Packager, PackagerCommon, PackagerKind, Repository, packager_common};
use crate::model::{DistributionType, platform};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SUPPORTED: LazyLock<CapabilityTable> = LazyLock::new(|| {
    capability::table(&[
        (DistributionType::Binary, ARCHIVES),
        (DistributionType::JavaBinary, ARCHIVES),
        (DistributionType::Jlink, ARCHIVES),
        (DistributionType::NativeImage, ARCHIVES),
        (DistributionType::FlatBinary, FLAT),
    ])
});

/// GoFish packager. Accepts macOS, Windows and glibc Linux artifacts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GofishPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    /// Fish food repository.
    pub repository: Repository,
}

crate::impl_overlay!(GofishPackager { common, repository });

impl Packager for GofishPackager {
    packager_common!(PackagerKind::Gofish);

    fn supports_platform(&self, platform: &str) -> bool {
        platform.trim().is_empty()
            || platform::is_mac(platform)
            || platform::is_windows(platform)
            || (platform::is_linux(platform) && !platform::is_alpine_linux(platform))
    }
}
