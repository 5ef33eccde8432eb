//! Java runtime images built with jlink.

use super::{Assembler, AssemblerCommon, DEFAULT_IMAGE_NAME, output_directory};
use crate::model::packager::capability::ZIP;
use crate::model::{Artifact, DistributionType};
use serde::{Deserialize, Serialize};

/// A JDK to link an image against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JlinkTarget {
    /// Platform of the JDK, e.g. `linux-x86_64`.
    pub platform: String,
    /// JDK home.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JlinkAssembler {
    #[serde(flatten)]
    pub common: AssemblerCommon,
    /// Default: None (`{{distributionName}}-{{projectVersion}}`)
    pub image_name: Option<String>,
    pub module_names: Vec<String>,
    /// Extra jlink arguments.
    pub args: Vec<String>,
    pub targets: Vec<JlinkTarget>,
}

crate::impl_overlay!(JlinkAssembler {
    common,
    image_name,
    module_names,
    args,
    targets,
});

impl JlinkAssembler {
    pub fn image_name(&self) -> &str {
        self.image_name.as_deref().unwrap_or(DEFAULT_IMAGE_NAME)
    }
}

impl Assembler for JlinkAssembler {
    fn section(&self) -> &'static str {
        "jlink"
    }

    fn common(&self) -> &AssemblerCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut AssemblerCommon {
        &mut self.common
    }

    fn distribution_type(&self) -> DistributionType {
        DistributionType::Jlink
    }

    /// One zipped image per target platform.
    fn outputs(&self) -> Vec<Artifact> {
        let directory = output_directory(self);
        self.targets
            .iter()
            .filter(|target| !target.platform.trim().is_empty())
            .map(|target| {
                Artifact::new(format!(
                    "{directory}/{}-{}{ZIP}",
                    self.image_name(),
                    target.platform
                ))
                .with_platform(target.platform.as_str())
            })
            .collect()
    }
}
