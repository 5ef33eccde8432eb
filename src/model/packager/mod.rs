//! Packagers publish distributions through third-party channels.
//!
//! Every packager is a configuration record plus three pieces of static
//! knowledge the [`selector`] consumes:
//!
//! - a [`CapabilityTable`] of accepted file extensions per distribution type
//! - a platform predicate ([`Packager::supports_platform`])
//! - a skip key (`skipBrew`, `skipDocker`, ...) artifacts can set to opt out
//!
//! # Module Organization
//!
//! - [`capability`] - Extension constants and capability tables
//! - [`selector`] - Candidate and on-disk artifact resolution
//! - [`repository`] - Target repositories for generated files
//! - one module per channel

pub mod capability;
mod repository;
pub mod selector;

mod appimage;
mod brew;
mod chocolatey;
mod docker;
mod flatpak;
mod gofish;
mod jbang;
mod jib;
mod macports;
mod scoop;
mod sdkman;
mod snap;
mod spec;
mod winget;

pub use appimage::AppImagePackager;
pub use brew::{BrewPackager, Cask};
pub use capability::CapabilityTable;
pub use chocolatey::ChocolateyPackager;
pub use docker::{Buildx, DockerConfiguration, DockerPackager, DockerSpec, Registry};
pub use flatpak::{FlatpakPackager, FlatpakRuntime};
pub use gofish::GofishPackager;
pub use jbang::JbangPackager;
pub use jib::{JibFormat, JibPackager, JibSpec};
pub use macports::MacportsPackager;
pub use repository::Repository;
pub use scoop::ScoopPackager;
pub use sdkman::{SdkmanCommand, SdkmanPackager};
pub use snap::{Confinement, SnapPackager};
pub use spec::SpecPackager;
pub use winget::{WingetInstaller, WingetPackager};

use super::{Active, Artifact, Context, Distribution, DistributionType, Error, Project};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    str::FromStr,
};

/// Identifies a packager.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PackagerKind {
    AppImage,
    Brew,
    Chocolatey,
    Docker,
    Flatpak,
    Gofish,
    Jbang,
    Jib,
    Macports,
    Scoop,
    Sdkman,
    Snap,
    Spec,
    Winget,
}

impl PackagerKind {
    /// All packagers, alphabetically.
    pub const ALL: [PackagerKind; 14] = [
        PackagerKind::AppImage,
        PackagerKind::Brew,
        PackagerKind::Chocolatey,
        PackagerKind::Docker,
        PackagerKind::Flatpak,
        PackagerKind::Gofish,
        PackagerKind::Jbang,
        PackagerKind::Jib,
        PackagerKind::Macports,
        PackagerKind::Scoop,
        PackagerKind::Sdkman,
        PackagerKind::Snap,
        PackagerKind::Spec,
        PackagerKind::Winget,
    ];

    /// Configuration name, e.g. `brew`.
    pub fn name(&self) -> &'static str {
        match self {
            PackagerKind::AppImage => "appimage",
            PackagerKind::Brew => "brew",
            PackagerKind::Chocolatey => "chocolatey",
            PackagerKind::Docker => "docker",
            PackagerKind::Flatpak => "flatpak",
            PackagerKind::Gofish => "gofish",
            PackagerKind::Jbang => "jbang",
            PackagerKind::Jib => "jib",
            PackagerKind::Macports => "macports",
            PackagerKind::Scoop => "scoop",
            PackagerKind::Sdkman => "sdkman",
            PackagerKind::Snap => "snap",
            PackagerKind::Spec => "spec",
            PackagerKind::Winget => "winget",
        }
    }

    /// Artifact extra property that opts an artifact out of this packager.
    pub fn skip_key(&self) -> &'static str {
        match self {
            PackagerKind::AppImage => "skipAppImage",
            PackagerKind::Brew => "skipBrew",
            PackagerKind::Chocolatey => "skipChocolatey",
            PackagerKind::Docker => "skipDocker",
            PackagerKind::Flatpak => "skipFlatpak",
            PackagerKind::Gofish => "skipGofish",
            PackagerKind::Jbang => "skipJbang",
            PackagerKind::Jib => "skipJib",
            PackagerKind::Macports => "skipMacports",
            PackagerKind::Scoop => "skipScoop",
            PackagerKind::Sdkman => "skipSdkman",
            PackagerKind::Snap => "skipSnap",
            PackagerKind::Spec => "skipSpec",
            PackagerKind::Winget => "skipWinget",
        }
    }
}

impl fmt::Display for PackagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PackagerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        PackagerKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::UnknownPackager(s.to_string()))
    }
}

/// Settings shared by every packager.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackagerCommon {
    /// Activation rule.
    ///
    /// Default: None (`ALWAYS`)
    pub active: Option<Active>,
    /// Keep going when this packager fails.
    ///
    /// Default: None (`false`)
    pub continue_on_error: Option<bool>,
    /// Download URL template for published artifacts.
    pub download_url: Option<String>,
    /// Directory with custom templates.
    pub template_directory: Option<String>,
    /// Template files not to generate.
    pub skip_templates: Vec<String>,
    /// Extra properties exposed to templates.
    pub extra_properties: BTreeMap<String, Value>,
    #[serde(skip)]
    failed: bool,
}

crate::impl_overlay!(PackagerCommon {
    active,
    continue_on_error,
    download_url,
    template_directory,
    skip_templates,
    extra_properties,
});

/// A distribution channel.
///
/// Implementors provide their capability table, platform predicate and
/// shared settings. Selection is provided on top of those.
pub trait Packager: fmt::Debug {
    /// Which packager this is.
    fn kind(&self) -> PackagerKind;

    /// Shared settings.
    fn common(&self) -> &PackagerCommon;

    /// Shared settings, mutably.
    fn common_mut(&mut self) -> &mut PackagerCommon;

    /// Static table of accepted extensions per distribution type.
    fn capabilities(&self) -> &'static CapabilityTable;

    /// Whether an artifact built for `platform` can be published.
    ///
    /// A blank platform always matches.
    fn supports_platform(&self, platform: &str) -> bool;

    /// Configuration name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Extra property key that opts artifacts out.
    fn skip_key(&self) -> &'static str {
        self.kind().skip_key()
    }

    /// Whether the capability table has an entry for `distribution_type`.
    fn supports_distribution(&self, distribution_type: DistributionType) -> bool {
        self.capabilities().contains_key(&distribution_type)
    }

    /// Accepted extensions for `distribution_type`, sorted. Empty when unsupported.
    fn supported_file_extensions(
        &self,
        distribution_type: DistributionType,
    ) -> BTreeSet<&'static str> {
        self.capabilities()
            .get(&distribution_type)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether `artifact` carries a true skip flag for this packager.
    fn is_skipped(&self, artifact: &Artifact) -> bool {
        artifact.is_true(self.skip_key())
    }

    /// Whether the packager is enabled for `project`.
    fn is_enabled(&self, project: &Project) -> bool {
        Active::resolve(self.common().active, project)
    }

    /// Whether failures of this packager should not stop the release.
    fn continue_on_error(&self) -> bool {
        self.common().continue_on_error.unwrap_or(false)
    }

    /// Marks the packager as failed.
    fn fail(&mut self) {
        self.common_mut().failed = true;
    }

    /// Whether [`fail`](Packager::fail) was called.
    fn is_failed(&self) -> bool {
        self.common().failed
    }

    /// Ordered artifacts this packager should act on.
    fn resolve_candidate_artifacts<'a>(
        &self,
        context: &Context,
        distribution: &'a Distribution,
    ) -> Vec<&'a Artifact> {
        selector::resolve_candidate_artifacts(self, context, distribution)
    }

    /// Candidates whose resolved path exists on disk.
    fn resolve_artifacts<'a>(
        &self,
        context: &Context,
        distribution: &'a Distribution,
    ) -> Vec<&'a Artifact> {
        selector::resolve_artifacts(self, context, distribution)
    }
}

/// Implements the boilerplate half of [`Packager`] for a record with a
/// `common` field and a module-level `SUPPORTED` table.
macro_rules! packager_common {
    ($kind:expr) => {
        fn kind(&self) -> $crate::model::PackagerKind {
            $kind
        }

        fn common(&self) -> &$crate::model::PackagerCommon {
            &self.common
        }

        fn common_mut(&mut self) -> &mut $crate::model::PackagerCommon {
            &mut self.common
        }

        fn capabilities(&self) -> &'static $crate::model::packager::CapabilityTable {
            &SUPPORTED
        }
    };
}
pub(crate) use packager_common;

/// Every packager's settings, as found under `[packagers]` or inside a
/// distribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Packagers {
    pub appimage: AppImagePackager,
    pub brew: BrewPackager,
    pub chocolatey: ChocolateyPackager,
    pub docker: DockerPackager,
    pub flatpak: FlatpakPackager,
    pub gofish: GofishPackager,
    pub jbang: JbangPackager,
    pub jib: JibPackager,
    pub macports: MacportsPackager,
    pub scoop: ScoopPackager,
    pub sdkman: SdkmanPackager,
    pub snap: SnapPackager,
    pub spec: SpecPackager,
    pub winget: WingetPackager,
}

crate::impl_overlay!(Packagers {
    appimage,
    brew,
    chocolatey,
    docker,
    flatpak,
    gofish,
    jbang,
    jib,
    macports,
    scoop,
    sdkman,
    snap,
    spec,
    winget,
});

impl Packagers {
    /// Looks up a packager by kind.
    pub fn get(&self, kind: PackagerKind) -> &dyn Packager {
        match kind {
            PackagerKind::AppImage => &self.appimage,
            PackagerKind::Brew => &self.brew,
            PackagerKind::Chocolatey => &self.chocolatey,
            PackagerKind::Docker => &self.docker,
            PackagerKind::Flatpak => &self.flatpak,
            PackagerKind::Gofish => &self.gofish,
            PackagerKind::Jbang => &self.jbang,
            PackagerKind::Jib => &self.jib,
            PackagerKind::Macports => &self.macports,
            PackagerKind::Scoop => &self.scoop,
            PackagerKind::Sdkman => &self.sdkman,
            PackagerKind::Snap => &self.snap,
            PackagerKind::Spec => &self.spec,
            PackagerKind::Winget => &self.winget,
        }
    }

    /// Looks up a packager by kind, mutably.
    pub fn get_mut(&mut self, kind: PackagerKind) -> &mut dyn Packager {
        match kind {
            PackagerKind::AppImage => &mut self.appimage,
            PackagerKind::Brew => &mut self.brew,
            PackagerKind::Chocolatey => &mut self.chocolatey,
            PackagerKind::Docker => &mut self.docker,
            PackagerKind::Flatpak => &mut self.flatpak,
            PackagerKind::Gofish => &mut self.gofish,
            PackagerKind::Jbang => &mut self.jbang,
            PackagerKind::Jib => &mut self.jib,
            PackagerKind::Macports => &mut self.macports,
            PackagerKind::Scoop => &mut self.scoop,
            PackagerKind::Sdkman => &mut self.sdkman,
            PackagerKind::Snap => &mut self.snap,
            PackagerKind::Spec => &mut self.spec,
            PackagerKind::Winget => &mut self.winget,
        }
    }

    /// All packagers in [`PackagerKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Packager> {
        PackagerKind::ALL.into_iter().map(|kind| self.get(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Overlay;

    #[test]
    fn kinds_round_trip_through_names() {
        for kind in PackagerKind::ALL {
            assert_eq!(kind.name().parse::<PackagerKind>().unwrap(), kind);
        }
        assert!("npm".parse::<PackagerKind>().is_err());
    }

    #[test]
    fn skip_keys_are_prefixed() {
        for kind in PackagerKind::ALL {
            assert!(kind.skip_key().starts_with("skip"));
        }
        assert_eq!(PackagerKind::Docker.skip_key(), "skipDocker");
    }

    #[test]
    fn lookups_return_matching_kind() {
        let packagers = Packagers::default();
        for kind in PackagerKind::ALL {
            assert_eq!(packagers.get(kind).kind(), kind);
        }
        assert_eq!(packagers.iter().count(), PackagerKind::ALL.len());
    }

    #[test]
    fn unsupported_type_has_no_extensions() {
        let packagers = Packagers::default();
        let jbang = packagers.get(PackagerKind::Jbang);
        assert!(!jbang.supports_distribution(DistributionType::NativePackage));
        assert!(jbang
            .supported_file_extensions(DistributionType::NativePackage)
            .is_empty());
    }

    #[test]
    fn failure_latch() {
        let mut packagers = Packagers::default();
        let brew = packagers.get_mut(PackagerKind::Brew);
        assert!(!brew.is_failed());
        brew.fail();
        assert!(brew.is_failed());
        assert!(!brew.continue_on_error());
    }

    #[test]
    fn distribution_layer_overrides_global() {
        let mut global = Packagers::default();
        global.brew.common.continue_on_error = Some(true);
        global.brew.formula_name = Some("app".into());

        let mut layer = Packagers::default();
        layer.brew.multi_platform = Some(true);
        layer.brew.formula_name = Some("app-cli".into());

        global.overlay(&layer);
        assert_eq!(global.brew.formula_name.as_deref(), Some("app-cli"));
        assert_eq!(global.brew.multi_platform, Some(true));
        assert!(global.brew.continue_on_error());
    }

    #[test]
    fn enablement_follows_active() {
        let mut brew = BrewPackager::default();
        brew.common.active = Some(Active::Release);
        assert!(brew.is_enabled(&Project::new("app", "1.0.0")));
        assert!(!brew.is_enabled(&Project::new("app", "1.0.0-SNAPSHOT")));
    }
}
