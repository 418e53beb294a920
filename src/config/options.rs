//! Loader options.
//!
//! Fields that the host may configure either with a literal string or with a
//! callback are modelled as enums with a `Computed` arm holding an `Arc`ed
//! closure, so options stay cheap to clone and can be shared across tasks.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default name template: content hash plus the original extension.
pub const DEFAULT_NAME: &str = "[contenthash].[ext]";

/// Callback form of `output_path` / `public_path`: `(url, resource_path, context)`.
pub type PathFn = dyn Fn(&str, &Path, &Path) -> String + Send + Sync;

/// Callback form of `name`: `(resource_path, resource_query)`.
pub type NameFn = dyn Fn(&Path, &str) -> String + Send + Sync;

/// Callback applied to the final public expression.
pub type TransformFn = dyn Fn(String) -> String + Send + Sync;

/// `output_path` / `public_path` value.
#[derive(Clone)]
pub enum PathOption {
    /// Prefix joined with the templated url.
    Literal(String),
    /// Result used verbatim.
    Computed(Arc<PathFn>),
}

impl PathOption {
    pub fn computed(f: impl Fn(&str, &Path, &Path) -> String + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }
}

impl fmt::Debug for PathOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl From<&str> for PathOption {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for PathOption {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

/// `name` value.
#[derive(Clone)]
pub enum NameOption {
    /// Template string handed to the interpolator.
    Template(String),
    /// Produces the template from the resource path and query.
    Computed(Arc<NameFn>),
}

impl NameOption {
    pub fn computed(f: impl Fn(&Path, &str) -> String + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    /// The literal template, if the name is not computed.
    pub fn template(&self) -> Option<&str> {
        match self {
            Self::Template(template) => Some(template),
            Self::Computed(_) => None,
        }
    }

    /// Resolve the template for one resource.
    pub fn resolve(&self, resource_path: &Path, resource_query: &str) -> String {
        match self {
            Self::Template(template) => template.clone(),
            Self::Computed(f) => f(resource_path, resource_query),
        }
    }
}

impl Default for NameOption {
    fn default() -> Self {
        Self::Template(DEFAULT_NAME.to_string())
    }
}

impl fmt::Debug for NameOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(s) => f.debug_tuple("Template").field(s).finish(),
            Self::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl From<&str> for NameOption {
    fn from(value: &str) -> Self {
        Self::Template(value.to_string())
    }
}

/// `post_transform_public_path` value.
#[derive(Clone)]
pub struct PostTransform(Arc<TransformFn>);

impl PostTransform {
    pub fn new(f: impl Fn(String) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn apply(&self, expression: String) -> String {
        (self.0)(expression)
    }
}

impl fmt::Debug for PostTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PostTransform(<fn>)")
    }
}

/// What to do with a `<stem>_dark<ext>` sibling once found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantPolicy {
    /// Pair only if both images have identical pixel dimensions (default).
    #[default]
    Validate,
    /// Pair any sibling without probing.
    Unchecked,
}

/// Options of one loader instance.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Base directory for `[path]`; relative values resolve against the root context.
    pub context: Option<PathBuf>,
    /// Output name template.
    pub name: NameOption,
    /// Where emitted files go, relative to the output store.
    pub output_path: Option<PathOption>,
    /// How the runtime reference is formed.
    pub public_path: Option<PathOption>,
    /// Final rewrite of the public expression.
    pub post_transform_public_path: Option<PostTransform>,
    /// Emit assets to the host store (`false` = reference-only build).
    pub emit_file: bool,
    /// `export default` (true) or `module.exports =` (false).
    pub es_module: bool,
    /// Pattern for `[N]` tokens.
    pub reg_exp: Option<Regex>,
    pub variant_policy: VariantPolicy,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            context: None,
            name: NameOption::default(),
            output_path: None,
            public_path: None,
            post_transform_public_path: None,
            emit_file: true,
            es_module: true,
            reg_exp: None,
            variant_policy: VariantPolicy::Validate,
        }
    }
}

impl LoaderOptions {
    /// Effective templating context for a host rooted at `root`.
    pub fn context_dir(&self, root: &Path) -> PathBuf {
        match &self.context {
            Some(context) => root.join(context),
            None => root.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LoaderOptions::default();
        assert_eq!(options.name.template(), Some(DEFAULT_NAME));
        assert!(options.emit_file);
        assert!(options.es_module);
        assert_eq!(options.variant_policy, VariantPolicy::Validate);
    }

    #[test]
    fn test_context_dir() {
        let mut options = LoaderOptions::default();
        assert_eq!(options.context_dir(Path::new("/site")), PathBuf::from("/site"));

        options.context = Some(PathBuf::from("src"));
        assert_eq!(options.context_dir(Path::new("/site")), PathBuf::from("/site/src"));

        options.context = Some(PathBuf::from("/elsewhere"));
        assert_eq!(
            options.context_dir(Path::new("/site")),
            PathBuf::from("/elsewhere")
        );
    }

    #[test]
    fn test_computed_name() {
        let name = NameOption::computed(|path, query| {
            format!("{}{query}", path.file_name().unwrap().to_string_lossy())
        });
        assert_eq!(name.template(), None);
        assert_eq!(name.resolve(Path::new("/a/b.png"), "?x"), "b.png?x");
    }

    #[test]
    fn test_debug_hides_closures() {
        let option = PathOption::computed(|url, _, _| url.to_string());
        assert_eq!(format!("{option:?}"), "Computed(<fn>)");
    }
}
