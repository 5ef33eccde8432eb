//! Zip and tarball archives.

use super::{Assembler, AssemblerCommon, DEFAULT_IMAGE_NAME, output_directory};
use crate::model::packager::capability::{TAR, TAR_BZ2, TAR_GZ, TAR_XZ, TBZ2, TGZ, TXZ, ZIP};
use crate::model::{Artifact, DistributionType};
use serde::{Deserialize, Serialize};

/// Archive container format.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
    TarXz,
    TarBz2,
    Tgz,
    Txz,
    Tbz2,
}

impl ArchiveFormat {
    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => ZIP,
            ArchiveFormat::Tar => TAR,
            ArchiveFormat::TarGz => TAR_GZ,
            ArchiveFormat::TarXz => TAR_XZ,
            ArchiveFormat::TarBz2 => TAR_BZ2,
            ArchiveFormat::Tgz => TGZ,
            ArchiveFormat::Txz => TXZ,
            ArchiveFormat::Tbz2 => TBZ2,
        }
    }
}

/// Packs files into one archive per format.
///
/// With `attachPlatform`, the platform is appended to the archive name and
/// recorded on each output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArchiveAssembler {
    #[serde(flatten)]
    pub common: AssemblerCommon,
    /// Archive base name template.
    ///
    /// Default: None (`{{distributionName}}-{{projectVersion}}`)
    pub archive_name: Option<String>,
    /// Distribution type of the archives.
    ///
    /// Default: None (`BINARY`)
    pub distribution_type: Option<DistributionType>,
    /// Formats to produce.
    ///
    /// Default: empty (`ZIP`)
    pub formats: Vec<ArchiveFormat>,
    pub attach_platform: Option<bool>,
    /// Target platform. Defaults to the current one when attached.
    pub platform: Option<String>,
}

crate::impl_overlay!(ArchiveAssembler {
    common,
    archive_name,
    distribution_type,
    formats,
    attach_platform,
    platform,
});

impl ArchiveAssembler {
    pub fn archive_name(&self) -> &str {
        self.archive_name.as_deref().unwrap_or(DEFAULT_IMAGE_NAME)
    }

    /// Configured formats, deduplicated in declaration order.
    pub fn formats(&self) -> Vec<ArchiveFormat> {
        let mut formats = Vec::new();
        for format in &self.formats {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }
        if formats.is_empty() {
            formats.push(ArchiveFormat::Zip);
        }
        formats
    }

    pub fn attach_platform(&self) -> bool {
        self.attach_platform.unwrap_or(false)
    }

    /// Platform recorded on the outputs. Blank unless attached.
    pub fn platform(&self) -> String {
        if !self.attach_platform() {
            return String::new();
        }
        self.platform
            .clone()
            .unwrap_or_else(|| crate::model::Platform::current().to_string())
    }
}

impl Assembler for ArchiveAssembler {
    fn section(&self) -> &'static str {
        "archive"
    }

    fn common(&self) -> &AssemblerCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut AssemblerCommon {
        &mut self.common
    }

    fn distribution_type(&self) -> DistributionType {
        self.distribution_type.unwrap_or(DistributionType::Binary)
    }

    fn outputs(&self) -> Vec<Artifact> {
        let directory = output_directory(self);
        let platform = self.platform();
        let suffix = if platform.is_empty() {
            String::new()
        } else {
            format!("-{platform}")
        };
        self.formats()
            .into_iter()
            .map(|format| {
                Artifact::new(format!(
                    "{directory}/{}{suffix}{}",
                    self.archive_name(),
                    format.extension()
                ))
                .with_platform(platform.as_str())
            })
            .collect()
    }
}
