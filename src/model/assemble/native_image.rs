//! Native executables built with GraalVM native-image.

use super::{ArchiveFormat, Assembler, AssemblerCommon, DEFAULT_IMAGE_NAME, output_directory};
use crate::model::{Artifact, DistributionType};
use serde::{Deserialize, Serialize};

/// Builds a native executable per target platform and archives each one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NativeImageAssembler {
    #[serde(flatten)]
    pub common: AssemblerCommon,
    /// Default: None (`{{distributionName}}-{{projectVersion}}`)
    pub image_name: Option<String>,
    /// Default: None (`ZIP`)
    pub archive_format: Option<ArchiveFormat>,
    /// Target platforms.
    pub targets: Vec<String>,
    /// Extra native-image arguments.
    pub args: Vec<String>,
}

crate::impl_overlay!(NativeImageAssembler {
    common,
    image_name,
    archive_format,
    targets,
    args,
});

impl NativeImageAssembler {
    pub fn image_name(&self) -> &str {
        self.image_name.as_deref().unwrap_or(DEFAULT_IMAGE_NAME)
    }

    pub fn archive_format(&self) -> ArchiveFormat {
        self.archive_format.unwrap_or(ArchiveFormat::Zip)
    }
}

impl Assembler for NativeImageAssembler {
    fn section(&self) -> &'static str {
        "native-image"
    }

    fn common(&self) -> &AssemblerCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut AssemblerCommon {
        &mut self.common
    }

    fn distribution_type(&self) -> DistributionType {
        DistributionType::NativeImage
    }

    fn outputs(&self) -> Vec<Artifact> {
        let directory = output_directory(self);
        let extension = self.archive_format().extension();
        self.targets
            .iter()
            .map(|platform| platform.trim())
            .filter(|platform| !platform.is_empty())
            .map(|platform| {
                Artifact::new(format!("{directory}/{}-{platform}{extension}", self.image_name()))
                    .with_platform(platform)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_per_platform() {
        let mut native: NativeImageAssembler = toml::from_str(
            r#"
            imageName = "cli"
            archiveFormat = "TAR_GZ"
            targets = ["linux-x86_64", "osx-aarch_64", " "]
            "#,
        )
        .unwrap();
        native.common.name = "cli".into();

        let paths: Vec<_> = native.outputs().iter().map(|a| a.path().to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "{{outputDirectory}}/assemble/cli/native-image/cli-linux-x86_64.tar.gz",
                "{{outputDirectory}}/assemble/cli/native-image/cli-osx-aarch_64.tar.gz",
            ]
        );
    }
}
