//! RPM spec files.

use super::capability::{self, ARCHIVES, CapabilityTable, JAR};
use super::{Packager, PackagerCommon, PackagerKind, Repository, packager_common};
use crate::model::{DistributionType, platform};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const SINGLE_JARS: &[&str] = &[JAR];

static SUPPORTED: LazyLock<CapabilityTable> = LazyLock::new(|| {
    capability::table(&[
        (DistributionType::Binary, ARCHIVES),
        (DistributionType::JavaBinary, ARCHIVES),
        (DistributionType::Jlink, ARCHIVES),
        (DistributionType::NativeImage, ARCHIVES),
        (DistributionType::SingleJar, SINGLE_JARS),
    ])
});

/// RPM spec packager. Accepts glibc Linux Intel artifacts only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpecPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    pub package_name: Option<String>,
    /// `Release:` field.
    ///
    /// Default: None (`1`)
    pub release: Option<String>,
    /// `Requires:` entries.
    pub requires: Vec<String>,
    pub repository: Repository,
}

crate::impl_overlay!(SpecPackager {
    common,
    package_name,
    release,
    requires,
    repository,
});

impl SpecPackager {
    /// `Release:` field.
    pub fn release(&self) -> &str {
        self.release.as_deref().unwrap_or("1")
    }
}

impl Packager for SpecPackager {
    packager_common!(PackagerKind::Spec);

    fn supports_platform(&self, platform: &str) -> bool {
        platform.trim().is_empty()
            || (platform::is_linux(platform)
                && platform::is_intel(platform)
                && !platform::is_alpine_linux(platform))
    }
}
