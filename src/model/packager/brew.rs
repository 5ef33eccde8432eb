//! Homebrew formulae and casks.

use super::capability::{self, ARCHIVES, CapabilityTable, DMG, FLAT, JAR, PKG, ZIP};
use super::{Packager, PackagerCommon, PackagerKind, Repository, packager_common};
use crate::model::{DistributionType, platform};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::LazyLock};

const NATIVE_PACKAGES: &[&str] = &[DMG, PKG, ZIP];
const SINGLE_JARS: &[&str] = &[JAR];

static SUPPORTED: LazyLock<CapabilityTable> = LazyLock::new(|| {
    capability::table(&[
        (DistributionType::Binary, ARCHIVES),
        (DistributionType::JavaBinary, ARCHIVES),
        (DistributionType::Jlink, ARCHIVES),
        (DistributionType::NativeImage, ARCHIVES),
        (DistributionType::NativePackage, NATIVE_PACKAGES),
        (DistributionType::SingleJar, SINGLE_JARS),
        (DistributionType::FlatBinary, FLAT),
    ])
});

/// Homebrew cask settings, used for `NATIVE_PACKAGE` distributions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cask {
    /// Generate a cask instead of a formula.
    pub enabled: Option<bool>,
    /// Cask token.
    pub name: Option<String>,
    /// Human readable name.
    pub display_name: Option<String>,
    /// Name of the `.app` inside the package.
    pub app_name: Option<String>,
    /// Name of the `.pkg` to install.
    pub pkg_name: Option<String>,
}

crate::impl_overlay!(Cask {
    enabled,
    name,
    display_name,
    app_name,
    pkg_name,
});

/// Homebrew packager.
///
/// Publishes to macOS only, unless `multiPlatform` is set, in which case
/// glibc Linux artifacts are accepted too.
///
/// ```toml
/// [packagers.brew]
/// active = "ALWAYS"
/// multiPlatform = true
///
/// [packagers.brew.repository]
/// owner = "acme"
/// name = "homebrew-tap"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrewPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    /// Formula class name.
    ///
    /// Default: None (derived from the distribution name)
    pub formula_name: Option<String>,
    /// Accept Linux artifacts as well as macOS ones.
    ///
    /// Default: None (`false`)
    pub multi_platform: Option<bool>,
    /// Tap repository.
    pub repository: Repository,
    /// Formula dependencies, name to version constraint (may be empty).
    pub dependencies: BTreeMap<String, String>,
    /// Livecheck block lines.
    pub livecheck: Vec<String>,
    /// Cask settings.
    pub cask: Cask,
}

crate::impl_overlay!(BrewPackager {
    common,
    formula_name,
    multi_platform,
    repository,
    dependencies,
    livecheck,
    cask,
});

impl BrewPackager {
    /// Whether Linux artifacts are accepted.
    pub fn is_multi_platform(&self) -> bool {
        self.multi_platform.unwrap_or(false)
    }
}

impl Packager for BrewPackager {
    packager_common!(PackagerKind::Brew);

    fn supports_platform(&self, platform: &str) -> bool {
        if platform.trim().is_empty() {
            return true;
        }
        if self.is_multi_platform() {
            platform::is_mac(platform)
                || (platform::is_linux(platform) && !platform::is_alpine_linux(platform))
        } else {
            platform::is_mac(platform)
        }
    }
}
