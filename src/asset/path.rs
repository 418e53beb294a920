//! Output path and public reference expression of an asset.
//!
//! ```text
//! url ──┬─ output_path: Literal → posix_join(prefix, url) ─┐
//!       │               Computed → f(url, resource, ctx)   │
//!       │                                                  ▼
//!       └─ public_path: None     → __webpack_public_path__ + "<output>"
//!                       Literal  → "<prefix/><url>"
//!                       Computed → f(url, resource, ctx)   (verbatim)
//!                                   │
//!            post_transform_public_path (if set, replaces the result)
//! ```

use std::path::Path;

use crate::config::{LoaderOptions, PathOption};
use crate::utils::path::{insert_suffix, posix_join};

use super::{AssetDescriptor, AssetInfo};

/// Runtime global holding the public path of the bundle.
pub const PUBLIC_PATH_GLOBAL: &str = "__webpack_public_path__";

/// Filename suffix of alternate (dark) variants.
pub const VARIANT_SUFFIX: &str = "_dark";

/// Derives output paths and public expressions for one resource.
///
/// Pure: no I/O, no errors.
#[derive(Debug, Clone, Copy)]
pub struct PathBuilder<'a> {
    options: &'a LoaderOptions,
    resource_path: &'a Path,
    context: &'a Path,
}

impl<'a> PathBuilder<'a> {
    pub fn new(options: &'a LoaderOptions, resource_path: &'a Path, context: &'a Path) -> Self {
        Self {
            options,
            resource_path,
            context,
        }
    }

    /// Location of the emitted file inside the output store.
    pub fn output_path(&self, url: &str) -> String {
        match &self.options.output_path {
            Some(PathOption::Computed(f)) => f(url, self.resource_path, self.context),
            Some(PathOption::Literal(prefix)) if !prefix.is_empty() => posix_join(prefix, url),
            _ => url.to_string(),
        }
    }

    /// Code expression resolving to the asset's runtime URL.
    pub fn public_expression(&self, url: &str, output_path: &str) -> String {
        let expression = match &self.options.public_path {
            Some(PathOption::Computed(f)) => f(url, self.resource_path, self.context),
            Some(PathOption::Literal(prefix)) if !prefix.is_empty() => {
                let joined = if prefix.ends_with('/') {
                    format!("{prefix}{url}")
                } else {
                    format!("{prefix}/{url}")
                };
                json_string(&joined)
            }
            _ => format!("{PUBLIC_PATH_GLOBAL} + {}", json_string(output_path)),
        };

        match &self.options.post_transform_public_path {
            Some(transform) => transform.apply(expression),
            None => expression,
        }
    }

    /// Descriptor of the primary asset.
    pub fn describe(&self, url: &str, info: AssetInfo) -> AssetDescriptor {
        let output_path = self.output_path(url);
        let public_expression = self.public_expression(url, &output_path);
        AssetDescriptor::new(output_path, public_expression, info)
    }

    /// Descriptor of the alternate asset paired with `primary`.
    ///
    /// The alternate lives next to the primary output, its url and output
    /// path both carrying [`VARIANT_SUFFIX`] before the extension.
    pub fn describe_alternate(
        &self,
        url: &str,
        primary: &AssetDescriptor,
        info: AssetInfo,
    ) -> AssetDescriptor {
        let alternate_url = variant_of(url);
        let output_path = variant_of(&primary.output_path);
        let public_expression = self.public_expression(&alternate_url, &output_path);
        AssetDescriptor::new(output_path, public_expression, info)
    }
}

/// Variant name of a url or output path; a `?query` tail stays last.
pub fn variant_of(path: &str) -> String {
    match path.split_once('?') {
        Some((path, query)) => format!("{}?{query}", insert_suffix(path, VARIANT_SUFFIX)),
        None => insert_suffix(path, VARIANT_SUFFIX),
    }
}

/// JSON string literal of `value`.
fn json_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
