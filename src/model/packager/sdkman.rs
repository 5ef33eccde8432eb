//! SDKMAN! candidate announcements.

use super::capability::{self, CapabilityTable, ZIP};
use super::{Packager, PackagerCommon, PackagerKind, packager_common};
use crate::model::DistributionType;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const ARCHIVES: &[&str] = &[ZIP];

/// Default SDKMAN! vendor API endpoint.
pub const DEFAULT_HOST: &str = "https://vendors.sdkman.io";

static SUPPORTED: LazyLock<CapabilityTable> = LazyLock::new(|| {
    capability::table(&[
        (DistributionType::Binary, ARCHIVES),
        (DistributionType::JavaBinary, ARCHIVES),
        (DistributionType::Jlink, ARCHIVES),
        (DistributionType::NativeImage, ARCHIVES),
    ])
});

/// Release command sent to the vendor API.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SdkmanCommand {
    /// Release and make default.
    #[default]
    Major,
    /// Release without changing the default.
    Minor,
}

/// SDKMAN! packager. Candidates are platform-neutral.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SdkmanPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,
    /// Candidate name.
    pub candidate: Option<String>,
    pub release_notes_url: Option<String>,
    /// Default: None (`MAJOR`)
    pub command: Option<SdkmanCommand>,
    pub consumer_key: Option<String>,
    #[serde(skip_serializing)]
    pub consumer_token: Option<String>,
    /// Default: None ([`DEFAULT_HOST`])
    pub host: Option<String>,
}

crate::impl_overlay!(SdkmanPackager {
    common,
    candidate,
    release_notes_url,
    command,
    consumer_key,
    consumer_token,
    host,
});

impl SdkmanPackager {
    pub fn command(&self) -> SdkmanCommand {
        self.command.unwrap_or_default()
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }
}

impl Packager for SdkmanPackager {
    packager_common!(PackagerKind::Sdkman);

    fn supports_platform(&self, _platform: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Overlay;

    #[test]
    fn defaults() {
        let sdkman = SdkmanPackager::default();
        assert_eq!(sdkman.command(), SdkmanCommand::Major);
        assert_eq!(sdkman.host(), DEFAULT_HOST);
        assert!(sdkman.supports_platform("linux-x86_64"));
        assert!(!sdkman.supports_distribution(DistributionType::FlatBinary));
    }

    #[test]
    fn token_is_not_serialized() {
        let mut sdkman: SdkmanPackager =
            toml::from_str("command = \"MINOR\"\nconsumerToken = \"s3cr3t\"").unwrap();
        sdkman.overlay(&SdkmanPackager {
            candidate: Some("app".into()),
            ..Default::default()
        });
        assert_eq!(sdkman.command(), SdkmanCommand::Minor);
        let json = serde_json::to_string(&sdkman).unwrap();
        assert!(!json.contains("s3cr3t"));
        assert!(json.contains("\"candidate\":\"app\""));
    }
}
