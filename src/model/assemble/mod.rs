//! Assemblers produce the artifacts packagers later publish.
//!
//! An assembler is a configuration record that knows which
//! [`DistributionType`] it yields and the path templates of the files it
//! writes. Running the underlying tools is left to the caller; this module
//! only turns assembler settings into [`Distribution`]s.
//!
//! # Module Organization
//!
//! - [`archive`] - zip and tarball archives
//! - [`jlink`] - Java runtime images
//! - [`native_image`] - GraalVM native executables
//! - [`jpackage`] - platform installers built by jpackage
//! - [`deb`] - Debian packages

pub mod archive;
pub mod deb;
pub mod jlink;
pub mod jpackage;
pub mod native_image;

pub use archive::{ArchiveAssembler, ArchiveFormat};
pub use deb::DebAssembler;
pub use jlink::{JlinkAssembler, JlinkTarget};
pub use jpackage::{JpackageAssembler, JpackageTarget};
pub use native_image::NativeImageAssembler;

use super::{Active, Artifact, Distribution, DistributionType, Project};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, fmt};

/// Template for the base name of assembled files.
pub const DEFAULT_IMAGE_NAME: &str = "{{distributionName}}-{{projectVersion}}";

/// Settings shared by every assembler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssemblerCommon {
    #[serde(skip)]
    name: String,
    /// Activation rule.
    ///
    /// Default: None (`ALWAYS`)
    pub active: Option<Active>,
    /// Whether the output becomes a distribution.
    ///
    /// Default: None (`true`)
    pub exported: Option<bool>,
    /// Executable name inside the output.
    pub executable: Option<String>,
    pub template_directory: Option<String>,
    pub extra_properties: BTreeMap<String, Value>,
}

crate::impl_overlay!(AssemblerCommon {
    active,
    exported,
    executable,
    template_directory,
    extra_properties,
});

impl AssemblerCommon {
    /// Assembler name, taken from its configuration key.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Something that assembles artifacts for a distribution.
pub trait Assembler: fmt::Debug {
    /// Configuration section, e.g. `archive`.
    fn section(&self) -> &'static str;

    /// Shared settings.
    fn common(&self) -> &AssemblerCommon;

    /// Shared settings, mutably.
    fn common_mut(&mut self) -> &mut AssemblerCommon;

    /// Distribution type of the output.
    fn distribution_type(&self) -> DistributionType;

    /// Path templates, with platforms, of every file this assembler writes.
    fn outputs(&self) -> Vec<Artifact>;

    /// Assembler name.
    fn name(&self) -> &str {
        self.common().name()
    }

    /// Whether the assembler is enabled for `project`.
    fn is_enabled(&self, project: &Project) -> bool {
        Active::resolve(self.common().active, project)
    }

    /// Whether the output becomes a distribution.
    fn is_exported(&self) -> bool {
        self.common().exported.unwrap_or(true)
    }

    /// Distribution named after this assembler, carrying its outputs.
    fn to_distribution(&self) -> Distribution {
        let distribution = Distribution::new(self.name(), self.distribution_type(), self.outputs());
        match &self.common().executable {
            Some(executable) => distribution.with_executable(executable),
            None => distribution,
        }
    }
}

/// Directory holding an assembler's outputs, as a template.
pub(crate) fn output_directory<A: Assembler + ?Sized>(assembler: &A) -> String {
    format!(
        "{{{{outputDirectory}}}}/assemble/{}/{}",
        assembler.name(),
        assembler.section()
    )
}

/// Every configured assembler, keyed by name within each section.
///
/// ```toml
/// [assemble.archive.app]
/// formats = ["ZIP", "TAR_GZ"]
///
/// [assemble.jlink.app-runtime]
/// [[assemble.jlink.app-runtime.targets]]
/// platform = "linux-x86_64"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Assemble {
    pub archive: BTreeMap<String, ArchiveAssembler>,
    pub jlink: BTreeMap<String, JlinkAssembler>,
    pub native_image: BTreeMap<String, NativeImageAssembler>,
    pub jpackage: BTreeMap<String, JpackageAssembler>,
    pub deb: BTreeMap<String, DebAssembler>,
}

impl Assemble {
    /// Copies each table key into the assembler's name.
    pub fn finalize(&mut self) {
        fn name_all<A: Assembler>(assemblers: &mut BTreeMap<String, A>) {
            for (name, assembler) in assemblers.iter_mut() {
                assembler.common_mut().name = name.clone();
            }
        }

        name_all(&mut self.archive);
        name_all(&mut self.jlink);
        name_all(&mut self.native_image);
        name_all(&mut self.jpackage);
        name_all(&mut self.deb);
    }

    /// All assemblers, section by section, each section ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Assembler> {
        let archive = self.archive.values().map(|a| a as &dyn Assembler);
        let jlink = self.jlink.values().map(|a| a as &dyn Assembler);
        let native_image = self.native_image.values().map(|a| a as &dyn Assembler);
        let jpackage = self.jpackage.values().map(|a| a as &dyn Assembler);
        let deb = self.deb.values().map(|a| a as &dyn Assembler);
        archive.chain(jlink).chain(native_image).chain(jpackage).chain(deb)
    }

    /// Whether no assembler is configured.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Distributions contributed by exported assemblers enabled for `project`.
    pub fn distributions(&self, project: &Project) -> Vec<Distribution> {
        self.iter()
            .filter(|assembler| {
                let keep = assembler.is_exported() && assembler.is_enabled(project);
                if !keep {
                    log::debug!(
                        "assembler {}.{} contributes no distribution",
                        assembler.section(),
                        assembler.name()
                    );
                }
                keep
            })
            .map(|assembler| assembler.to_distribution())
            .collect()
    }
}
