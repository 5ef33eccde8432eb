//! Snapcraft snaps.

use super::capability::{self, CapabilityTable, DEB, FLAT, TARBALLS};
use super::{Packager, PackagerCommon, PackagerKind, Repository, packager_common};
use crate::model::{DistributionType, platform};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const NATIVE_PACKAGES: &[&str] = &[DEB];

static SUPPORTED: LazyLock<CapabilityTable> = LazyLock::new(|| {
    capability::table(&[
        (DistributionType::Binary, TARBALLS),
        (DistributionType::JavaBinary, TARBALLS),
        (DistributionType::Jlink, TARBALLS),
        (DistributionType::NativeImage, TARBALLS),
        (DistributionType::NativePackage, NATIVE_PACKAGES),
        (DistributionType::FlatBinary, FLAT),
    ])
});

/// Snap confinement level.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confinement {
    #[default]
    Strict,
    Classic,
    Devmode,
}

/// Snap packager. Accepts artifacts for any Unix platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    /// Snap name.
    pub package_name: Option<String>,
    /// Base snap, e.g. `core22`.
    pub base: Option<String>,
    /// `stable` or `devel`.
    pub grade: Option<String>,
    /// Confinement level.
    ///
    /// Default: None (`strict`)
    pub confinement: Option<Confinement>,
    /// Plugs declared by the snap.
    pub local_plugs: Vec<String>,
    /// Slots declared by the snap.
    pub local_slots: Vec<String>,
    /// Build on Launchpad instead of locally.
    pub remote_build: Option<bool>,
    /// Repository holding the generated snapcraft.yaml.
    pub repository: Repository,
}

crate::impl_overlay!(SnapPackager {
    common,
    package_name,
    base,
    grade,
    confinement,
    local_plugs,
    local_slots,
    remote_build,
    repository,
});

impl SnapPackager {
    /// Base snap.
    pub fn base(&self) -> &str {
        self.base.as_deref().unwrap_or("core22")
    }

    /// Release grade.
    pub fn grade(&self) -> &str {
        self.grade.as_deref().unwrap_or("stable")
    }
}

impl Packager for SnapPackager {
    packager_common!(PackagerKind::Snap);

    fn supports_platform(&self, platform: &str) -> bool {
        platform.trim().is_empty() || platform::is_unix(platform)
    }
}
