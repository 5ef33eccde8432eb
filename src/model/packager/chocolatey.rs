//! Chocolatey packages for Windows.

use super::capability::{self, CapabilityTable, EXE, MSI, ZIP};
use super::{Packager, PackagerCommon, PackagerKind, Repository, packager_common};
use crate::model::{DistributionType, platform};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const ARCHIVES: &[&str] = &[ZIP];
const INSTALLERS: &[&str] = &[EXE, MSI];

static SUPPORTED: LazyLock<CapabilityTable> = LazyLock::new(|| {
    capability::table(&[
        (DistributionType::Binary, ARCHIVES),
        (DistributionType::JavaBinary, ARCHIVES),
        (DistributionType::Jlink, ARCHIVES),
        (DistributionType::NativeImage, ARCHIVES),
        (DistributionType::NativePackage, INSTALLERS),
    ])
});

/// Default Chocolatey community feed.
pub const DEFAULT_SOURCE: &str = "https://push.chocolatey.org/";

/// Chocolatey packager. Accepts Intel Windows artifacts only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChocolateyPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    /// Package id on the feed.
    pub package_name: Option<String>,
    /// Feed account.
    pub username: Option<String>,
    /// Feed API key.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Package title.
    pub title: Option<String>,
    /// Icon URL template.
    pub icon_url: Option<String>,
    /// Feed to push to.
    ///
    /// Default: None ([`DEFAULT_SOURCE`])
    pub source: Option<String>,
    /// Build the package on a remote Windows runner.
    pub remote_build: Option<bool>,
    /// Repository holding the generated nuspec.
    pub repository: Repository,
}

crate::impl_overlay!(ChocolateyPackager {
    common,
    package_name,
    username,
    api_key,
    title,
    icon_url,
    source,
    remote_build,
    repository,
});

impl ChocolateyPackager {
    /// Feed to push to.
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }
}

impl Packager for ChocolateyPackager {
    packager_common!(PackagerKind::Chocolatey);

    fn supports_platform(&self, platform: &str) -> bool {
        platform.trim().is_empty()
            || (platform::is_windows(platform) && platform::is_intel(platform))
    }
}
