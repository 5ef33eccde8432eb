//! The root of the release configuration graph.

use super::{
    Artifact, Assemble, Context, Distribution, Error, Overlay, PackagerKind, Packagers, Project,
    Result,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which artifacts a selection returns.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Selection {
    /// Every eligible artifact, whether or not it exists.
    Candidates,
    /// Eligible artifacts present on disk.
    #[default]
    Existing,
}

/// Project, assemblers, distributions and global packager defaults.
///
/// Call [`finalize`](ReleaseModel::finalize) after deserializing and
/// [`prepare`](ReleaseModel::prepare) once the [`Context`] is known.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReleaseModel {
    project: Project,
    assemble: Assemble,
    distributions: BTreeMap<String, Distribution>,
    packagers: Packagers,
}

impl ReleaseModel {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            ..Default::default()
        }
    }

    /// Adds a distribution keyed by its name. Returns self for chaining.
    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distributions
            .insert(distribution.name().to_string(), distribution);
        self
    }

    /// Sets global packager defaults. Returns self for chaining.
    pub fn with_packagers(mut self, packagers: Packagers) -> Self {
        self.packagers = packagers;
        self
    }

    /// Sets the assemblers. Returns self for chaining.
    pub fn with_assemble(mut self, assemble: Assemble) -> Self {
        self.assemble = assemble;
        self
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn assemble(&self) -> &Assemble {
        &self.assemble
    }

    /// Distributions by name.
    pub fn distributions(&self) -> &BTreeMap<String, Distribution> {
        &self.distributions
    }

    /// Global packager defaults.
    pub fn packagers(&self) -> &Packagers {
        &self.packagers
    }

    /// Looks up a distribution.
    pub fn distribution(&self, name: &str) -> Result<&Distribution> {
        self.distributions
            .get(name)
            .ok_or_else(|| Error::DistributionNotFound(name.to_string()))
    }

    /// Names distributions and assemblers after their keys and folds in
    /// the distributions contributed by assemblers.
    ///
    /// A configured distribution keeps its artifacts when an assembler of
    /// the same name exists.
    pub fn finalize(&mut self) {
        for (name, distribution) in self.distributions.iter_mut() {
            distribution.set_name(name);
        }

        self.assemble.finalize();
        for distribution in self.assemble.distributions(&self.project) {
            if self.distributions.contains_key(distribution.name()) {
                log::debug!(
                    "distribution {} is configured explicitly, assembler outputs ignored",
                    distribution.name()
                );
                continue;
            }
            log::debug!(
                "assembler contributes distribution {} ({})",
                distribution.name(),
                distribution.distribution_type()
            );
            self.distributions
                .insert(distribution.name().to_string(), distribution);
        }
    }

    /// Resolves artifact enablement against the project and applies the
    /// context's platform selection.
    pub fn prepare(&mut self, context: &Context) {
        for distribution in self.distributions.values_mut() {
            for artifact in distribution.artifacts_mut() {
                artifact.resolve_enabled(&self.project);
                artifact
                    .apply_selection(context.selected_platforms(), context.rejected_platforms());
            }
        }
    }

    /// Global packager settings with the distribution's own section on top.
    pub fn effective_packagers(&self, distribution: &Distribution) -> Packagers {
        self.packagers.clone().overlaid(distribution.packagers())
    }

    /// Artifacts `packager` would publish for `distribution`.
    ///
    /// Disabled packagers and distributions select nothing.
    pub fn select<'a>(
        &'a self,
        context: &Context,
        packager: PackagerKind,
        distribution: &str,
        selection: Selection,
    ) -> Result<Vec<&'a Artifact>> {
        let distribution = self.distribution(distribution)?;
        if !distribution.is_enabled(&self.project) {
            log::info!("distribution {} is not active", distribution.name());
            return Ok(Vec::new());
        }

        let packagers = self.effective_packagers(distribution);
        let packager = packagers.get(packager);
        if !packager.is_enabled(&self.project) {
            log::info!(
                "packager {} is not active for {}",
                packager.name(),
                distribution.name()
            );
            return Ok(Vec::new());
        }

        Ok(match selection {
            Selection::Candidates => packager.resolve_candidate_artifacts(context, distribution),
            Selection::Existing => packager.resolve_artifacts(context, distribution),
        })
    }
}
