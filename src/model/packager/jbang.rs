//! JBang catalogs for Java applications.

use super::capability::{self, ARCHIVES, CapabilityTable, JAR};
use super::{Packager, PackagerCommon, PackagerKind, Repository, packager_common};
use crate::model::DistributionType;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const SINGLE_JARS: &[&str] = &[JAR];

static SUPPORTED: LazyLock<CapabilityTable> = LazyLock::new(|| {
    capability::table(&[
        (DistributionType::JavaBinary, ARCHIVES),
        (DistributionType::SingleJar, SINGLE_JARS),
    ])
});

/// JBang packager. Java distributions run anywhere, so every platform matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JbangPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    /// Catalog alias.
    pub alias: Option<String>,
    /// Script file name.
    pub script: Option<String>,
    /// Catalog repository.
    pub repository: Repository,
}

crate::impl_overlay!(JbangPackager {
    common,
    alias,
    script,
    repository,
});

impl Packager for JbangPackager {
    packager_common!(PackagerKind::Jbang);

    fn supports_platform(&self, _platform: &str) -> bool {
        true
    }
}
