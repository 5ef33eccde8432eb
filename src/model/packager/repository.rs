//! Git repositories packagers publish their generated files to.

use serde::{Deserialize, Serialize};

/// A tap, bucket, catalog or manifest repository.
///
/// ```toml
/// [packagers.brew.repository]
/// owner = "acme"
/// name = "homebrew-tap"
/// branch = "main"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Repository {
    /// Repository owner or organization.
    pub owner: Option<String>,
    /// Repository name.
    pub name: Option<String>,
    /// Target branch.
    ///
    /// Default: None (repository default branch)
    pub branch: Option<String>,
    /// Username used to push.
    pub username: Option<String>,
    /// Token used to push.
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// Commit message template.
    pub commit_message: Option<String>,
}

crate::impl_overlay!(Repository {
    owner,
    name,
    branch,
    username,
    token,
    commit_message,
});

impl Repository {
    /// Whether owner and name are both set.
    pub fn is_configured(&self) -> bool {
        self.owner.is_some() && self.name.is_some()
    }

    /// `owner/name`, or `None` when not configured.
    pub fn canonical_name(&self) -> Option<String> {
        match (&self.owner, &self.name) {
            (Some(owner), Some(name)) => Some(format!("{owner}/{name}")),
            _ => None,
        }
    }
}
