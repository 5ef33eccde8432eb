//! Builder for constructing a Context.

use super::Context;
use crate::model::{Project, TemplateEngine};
use serde_json::Value;
use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
};

/// Builder for [`Context`].
///
/// # Examples
///
/// ```
/// use release_model::model::{ContextBuilder, Project};
///
/// # fn example() -> release_model::model::Result<()> {
/// let context = ContextBuilder::new()
///     .base_dir("/work/app")
///     .project(&Project::new("app", "1.0.0"))
///     .selected_platforms(vec!["osx".into()])
///     .build()?;
///
/// assert_eq!(context.output_dir().to_str(), Some("/work/app/out/release"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Default)]
pub struct ContextBuilder {
    dry_run: bool,
    base_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    props: BTreeMap<String, Value>,
    selected_platforms: Vec<String>,
    rejected_platforms: Vec<String>,
}

impl ContextBuilder {
    /// Creates a new context builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the base directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn base_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.base_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output directory.
    ///
    /// Default: `<base_dir>/out/release`
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enables dry-run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Adds the project's template properties.
    pub fn project(mut self, project: &Project) -> Self {
        self.props.extend(project.props());
        self
    }

    /// Adds a single template property.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Restricts the run to these platforms.
    pub fn selected_platforms(mut self, platforms: Vec<String>) -> Self {
        self.selected_platforms = platforms;
        self
    }

    /// Excludes these platforms from the run.
    pub fn rejected_platforms(mut self, platforms: Vec<String>) -> Self {
        self.rejected_platforms = platforms;
        self
    }

    /// Builds the context.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_dir` is missing or a platform is both
    /// selected and rejected.
    pub fn build(self) -> crate::model::Result<Context> {
        use crate::model::error::Context as _;

        let base_dir = self.base_dir.context("base_dir is required")?;
        if let Some(platform) = self
            .selected_platforms
            .iter()
            .find(|p| self.rejected_platforms.contains(p))
        {
            crate::bail!("platform {} is both selected and rejected", platform);
        }
        let output_dir = self
            .output_dir
            .unwrap_or_else(|| base_dir.join("out").join("release"));

        let mut props = self.props;
        props.insert(
            "basedir".into(),
            Value::from(base_dir.to_string_lossy().into_owned()),
        );
        props.insert(
            "outputDirectory".into(),
            Value::from(output_dir.to_string_lossy().into_owned()),
        );
        props.insert("dryRun".into(), Value::from(self.dry_run));

        Ok(Context {
            dry_run: self.dry_run,
            base_dir,
            output_dir,
            props,
            selected_platforms: self.selected_platforms,
            rejected_platforms: self.rejected_platforms,
            templates: TemplateEngine::new(),
            resolved_paths: RefCell::new(HashMap::new()),
        })
    }
}
