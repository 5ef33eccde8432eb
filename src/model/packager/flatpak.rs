//! Flatpak applications.

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

/// Flatpak runtime family.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlatpakRuntime {
    #[default]
    Freedesktop,
    Gnome,
    Kde,
    Elementary,
}

impl FlatpakRuntime {
    /// Runtime id.
    pub fn runtime(&self) -> &'static str {
        match self {
            FlatpakRuntime::Freedesktop => "org.freedesktop.Platform",
            FlatpakRuntime::Gnome => "org.gnome.Platform",
            FlatpakRuntime::Kde => "org.kde.Platform",
            FlatpakRuntime::Elementary => "io.elementary.Platform",
        }
    }

    /// SDK id matching the runtime.
    pub fn sdk(&self) -> &'static str {
        match self {
            FlatpakRuntime::Freedesktop => "org.freedesktop.Sdk",
            FlatpakRuntime::Gnome => "org.gnome.Sdk",
            FlatpakRuntime::Kde => "org.kde.Sdk",
            FlatpakRuntime::Elementary => "io.elementary.Sdk",
        }
    }
}

/// Flatpak packager. Accepts glibc Linux x86_64 artifacts only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlatpakPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    /// Reverse-DNS application id.
    pub component_id: Option<String>,
    pub runtime: Option<FlatpakRuntime>,
    pub runtime_version: Option<String>,
    pub sdk_extensions: Vec<String>,
    pub finish_args: Vec<String>,
    pub categories: Vec<String>,
    pub developer_name: Option<String>,
    pub repository: Repository,
}

crate::impl_overlay!(FlatpakPackager {
    common,
    component_id,
    runtime,
    runtime_version,
    sdk_extensions,
    finish_args,
    categories,
    developer_name,
    repository,
});

impl Packager for FlatpakPackager {
    packager_common!(PackagerKind::Flatpak);

    fn supports_platform(&self, platform: &str) -> bool {
        platform.trim().is_empty()
            || (platform::is_linux(platform)
                && platform::is_x86_64(platform)
                && !platform::is_alpine_linux(platform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_x86_64_glibc_only() {
        let flatpak = FlatpakPackager::default();
        assert!(flatpak.supports_platform("linux-x86_64"));
        assert!(!flatpak.supports_platform("linux-aarch_64"));
        assert!(!flatpak.supports_platform("linux_musl-x86_64"));
        assert!(!flatpak.supports_platform("osx-x86_64"));
    }

    #[test]
    fn runtime_ids() {
        let flatpak: FlatpakPackager = toml::from_str(r#"runtime = "GNOME""#).unwrap();
        let runtime = flatpak.runtime.unwrap_or_default();
        assert_eq!(runtime.runtime(), "org.gnome.Platform");
        assert_eq!(runtime.sdk(), "org.gnome.Sdk");
    }
}
