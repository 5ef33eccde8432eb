//! AppImage portable Linux applications.

use super::capability::{self, ARCHIVES, CapabilityTable};
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
    ])
});

/// AppImage packager. Accepts glibc Linux x86_64 artifacts only.
///
/// ```toml
/// [packagers.appimage]
/// componentId = "com.acme.app"
/// categories = ["Utility"]
/// developerName = "Acme"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppImagePackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    /// Reverse-DNS component id for the AppStream metadata.
    pub component_id: Option<String>,
    /// freedesktop.org categories.
    pub categories: Vec<String>,
    pub developer_name: Option<String>,
    /// Leave release entries out of the AppStream metadata.
    pub skip_releases: Option<bool>,
    /// Launch under a terminal.
    pub requires_terminal: Option<bool>,
    pub repository: Repository,
}

crate::impl_overlay!(AppImagePackager {
    common,
    component_id,
    categories,
    developer_name,
    skip_releases,
    requires_terminal,
    repository,
});

impl Packager for AppImagePackager {
    packager_common!(PackagerKind::AppImage);

    fn supports_platform(&self, platform: &str) -> bool {
        platform.trim().is_empty()
            || (platform::is_linux(platform)
                && platform::is_x86_64(platform)
                && !platform::is_alpine_linux(platform))
    }
}
