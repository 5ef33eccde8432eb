//! winget manifests for Windows.

use super::capability::{self, CapabilityTable, EXE, MSI, MSIX, ZIP};
use super::{Packager, PackagerCommon, PackagerKind, Repository, packager_common};
use crate::model::{DistributionType, platform};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const ARCHIVES: &[&str] = &[ZIP];
const INSTALLERS: &[&str] = &[EXE, MSI, MSIX];

static SUPPORTED: LazyLock<CapabilityTable> = LazyLock::new(|| {
    capability::table(&[
        (DistributionType::Binary, ARCHIVES),
        (DistributionType::JavaBinary, ARCHIVES),
        (DistributionType::Jlink, ARCHIVES),
        (DistributionType::NativeImage, ARCHIVES),
        (DistributionType::NativePackage, INSTALLERS),
    ])
});

/// Installer section of the manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WingetInstaller {
    /// `msi`, `exe`, `zip`, ...
    pub kind: Option<String>,
    /// `user` or `machine`.
    pub scope: Option<String>,
    /// `interactive`, `silent`, `silentWithProgress`.
    pub modes: Vec<String>,
    pub upgrade_behavior: Option<String>,
    pub command: Option<String>,
}

crate::impl_overlay!(WingetInstaller {
    kind,
    scope,
    modes,
    upgrade_behavior,
    command,
});

/// winget packager. Accepts Windows artifacts of any architecture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WingetPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    /// `Publisher.Package`.
    pub package_identifier: Option<String>,
    pub publisher: Option<String>,
    pub moniker: Option<String>,
    pub minimum_os_version: Option<String>,
    pub tags: Vec<String>,
    pub installer: WingetInstaller,
    pub repository: Repository,
}

crate::impl_overlay!(WingetPackager {
    common,
    package_identifier,
    publisher,
    moniker,
    minimum_os_version,
    tags,
    installer,
    repository,
});

impl WingetPackager {
    /// Minimum Windows version, defaulting to `10.0.0.0`.
    pub fn minimum_os_version(&self) -> &str {
        self.minimum_os_version.as_deref().unwrap_or("10.0.0.0")
    }
}

impl Packager for WingetPackager {
    packager_common!(PackagerKind::Winget);

    fn supports_platform(&self, platform: &str) -> bool {
        platform.trim().is_empty() || platform::is_windows(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Overlay;

    #[test]
    fn installers_in_extension_order() {
        let winget = WingetPackager::default();
        let extensions: Vec<_> = winget
            .supported_file_extensions(DistributionType::NativePackage)
            .into_iter()
            .collect();
        assert_eq!(extensions, vec![".exe", ".msi", ".msix"]);
        assert!(!winget.supports_platform("linux-x86_64"));
        assert!(winget.supports_platform("windows-aarch_64"));
    }

    #[test]
    fn installer_overlay() {
        let mut winget: WingetPackager = toml::from_str(
            r#"
            publisher = "Acme"
            [installer]
            kind = "msi"
            modes = ["silent"]
            "#,
        )
        .unwrap();
        winget.overlay(&WingetPackager {
            installer: WingetInstaller {
                scope: Some("machine".into()),
                ..Default::default()
            },
            ..Default::default()
        });
        assert_eq!(winget.installer.kind.as_deref(), Some("msi"));
        assert_eq!(winget.installer.scope.as_deref(), Some("machine"));
        assert_eq!(winget.installer.modes, vec!["silent"]);
        assert_eq!(winget.minimum_os_version(), "10.0.0.0");
    }
}
