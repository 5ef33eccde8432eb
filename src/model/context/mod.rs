//! Runtime context shared by assemblers, packagers and artifact selection.

mod builder;

pub use builder::ContextBuilder;

use super::{Artifact, Distribution, TemplateEngine};
use path_absolutize::Absolutize;
use serde_json::Value;
use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
};

/// Execution context for one release run.
///
/// Holds the resolved template properties and memoizes artifact path
/// resolution, keyed by distribution name, path template and the layered
/// distribution and artifact properties. The same (distribution, artifact)
/// pair always resolves to the same path for the lifetime of the context.
/// The memo is not `Sync`; a context belongs to a single thread.
///
/// Constructed via [`ContextBuilder`].
#[derive(Debug)]
pub struct Context {
    dry_run: bool,
    base_dir: PathBuf,
    output_dir: PathBuf,
    props: BTreeMap<String, Value>,
    selected_platforms: Vec<String>,
    rejected_platforms: Vec<String>,
    templates: TemplateEngine,
    resolved_paths: RefCell<HashMap<(String, String, String), PathBuf>>,
}

impl Context {
    /// Whether side effects should be skipped.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Directory relative paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory assemblers write into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Resolved template properties.
    pub fn props(&self) -> &BTreeMap<String, Value> {
        &self.props
    }

    /// Platforms the run is restricted to; empty means all.
    pub fn selected_platforms(&self) -> &[String] {
        &self.selected_platforms
    }

    /// Platforms excluded from the run.
    pub fn rejected_platforms(&self) -> &[String] {
        &self.rejected_platforms
    }

    /// Template engine used for resolution.
    pub fn templates(&self) -> &TemplateEngine {
        &self.templates
    }

    /// Resolves an artifact's path template to an absolute path.
    ///
    /// Properties are layered context, then distribution, then artifact. A
    /// template that fails to render is logged and used verbatim.
    pub fn resolve_artifact_path(
        &self,
        distribution: &Distribution,
        artifact: &Artifact,
    ) -> PathBuf {
        let mut layered = distribution.props();
        layered.extend(artifact.props());
        let key = (
            distribution.name().to_string(),
            artifact.path().to_string(),
            Value::Object(layered.clone().into_iter().collect()).to_string(),
        );
        if let Some(path) = self.resolved_paths.borrow().get(&key) {
            return path.clone();
        }

        let mut props = self.props.clone();
        props.extend(layered);

        let rendered = match self.templates.render(artifact.path(), &props) {
            Ok(rendered) => rendered,
            Err(e) => {
                log::warn!(
                    "Failed to resolve artifact path '{}' in distribution {}: {}",
                    artifact.path(),
                    distribution.name(),
                    e
                );
                artifact.path().to_string()
            }
        };

        let path = self.absolute(Path::new(&rendered));
        log::debug!("Resolved {} -> {}", artifact.path(), path.display());
        self.resolved_paths.borrow_mut().insert(key, path.clone());
        path
    }

    /// Renders an arbitrary template with the context properties.
    pub fn render(&self, template: &str) -> super::Result<String> {
        self.templates.render(template, &self.props)
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        match path.absolutize_from(self.base_dir.as_path()) {
            Ok(path) => path.into_owned(),
            Err(e) => {
                log::warn!("Failed to normalize {}: {}", path.display(), e);
                self.base_dir.join(path)
            }
        }
    }
}
