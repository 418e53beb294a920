//! One loader invocation: template → paths → variant → emission → source.
//!
//! ```text
//! content ─▶ interpolate name ─▶ PathBuilder::describe (primary)
//!                                     │
//!                      find_variant ──┤ none ───────────────┐
//!                                     │ found               │
//!                      accept_variant (probe + compare)     │
//!                      PathBuilder::describe_alternate      │
//!                                     ▼                     ▼
//!                      emit (alternate, primary) ─▶ module_source
//! ```
//!
//! Every fallible step runs before the first emission, so a failed
//! invocation never leaves a partial result in the store.


use std::sync::Arc;

use crate::asset::{
    AssetDescriptor, AssetInfo, PathBuilder, PendingAsset, emit_assets, is_immutable_name,
    module_source,
    variant::{accept_variant, find_variant, source_filename},
};
use crate::config::{ConfigError, LoaderOptions, validate_options};
use crate::error::LoadError;
use crate::host::HostContext;
use crate::template::{Interpolator, NameInterpolator, TemplateContext};

/// Outcome of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub primary: AssetDescriptor,
    /// Accepted dark variant, if any.
    pub alternate: Option<AssetDescriptor>,
    /// Number of files handed to the store (0 for reference-only builds).
    pub emitted: usize,
    /// Generated module source.
    pub source: String,
}

impl Resolution {
    /// Whether the source has the light/dark object shape.
    pub fn is_pair(&self) -> bool {
        self.alternate.is_some()
    }
}

/// A configured loader. Options are validated once, at construction.
#[derive(Clone)]
pub struct Loader {
    options: LoaderOptions,
    interpolator: Arc<dyn NameInterpolator>,
}

impl Loader {
    pub fn new(options: LoaderOptions) -> Result<Self, ConfigError> {
        validate_options(&options)?;
        Ok(Self {
            options,
            interpolator: Arc::new(Interpolator),
        })
    }

    /// Replace the default name interpolation service.
    pub fn with_interpolator(mut self, interpolator: impl NameInterpolator + 'static) -> Self {
        self.interpolator = Arc::new(interpolator);
        self
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Process the resource of `host` and return its module source.
    pub async fn load<H>(&self, host: &H, content: &[u8]) -> Result<String, LoadError>
    where
        H: HostContext + ?Sized,
    {
        self.resolve(host, content).await.map(|r| r.source)
    }

    /// Process the resource of `host` and return every derived value.
    pub async fn resolve<H>(&self, host: &H, content: &[u8]) -> Result<Resolution, LoadError>
    where
        H: HostContext + ?Sized,
    {
        let options = &self.options;
        let root = host.root_context();
        let resource = host.resource_path();
        let context = options.context_dir(root);

        let template = options.name.resolve(resource, host.resource_query());
        let url = self.interpolator.interpolate(
            &template,
            &TemplateContext {
                context: &context,
                resource_path: resource,
                resource_query: host.resource_query(),
                content,
                reg_exp: options.reg_exp.as_ref(),
            },
        )?;

        let immutable = is_immutable_name(&options.name);
        let filename = source_filename(root, resource);
        let builder = PathBuilder::new(options, resource, &context);
        let primary = builder.describe(&url, AssetInfo::new(filename.clone(), immutable));

        let alternate = match find_variant(resource, &filename) {
            Some(candidate) => {
                let bytes = accept_variant(
                    options.variant_policy,
                    resource,
                    &filename,
                    content,
                    &candidate,
                )
                .await?;
                let info = AssetInfo::new(candidate.source_filename, immutable);
                Some((builder.describe_alternate(&url, &primary, info), bytes))
            }
            None => None,
        };

        let emitted = if options.emit_file {
            let mut pending = Vec::with_capacity(2);
            if let Some((descriptor, bytes)) = &alternate {
                pending.push(PendingAsset::new(descriptor, bytes));
            }
            pending.push(PendingAsset::new(&primary, content));
            emit_assets(host, &pending)?
        } else {
            crate::debug!("load"; "{}: emission disabled", filename);
            0
        };

        let alternate = alternate.map(|(descriptor, _)| descriptor);
        let source = module_source(
            options.es_module,
            &primary.public_expression,
            alternate.as_ref().map(|d| d.public_expression.as_str()),
        );

        crate::debug!("load"; "{} -> {}{}", filename, primary.output_path,
            alternate.as_ref().map(|d| format!(" + {}", d.output_path)).unwrap_or_default());

        Ok(Resolution {
            primary,
            alternate,
            emitted,
            source,
        })
    }
}

/// Validate `options` and process the resource of `host` in one call.
pub async fn load<H>(host: &H, content: &[u8], options: LoaderOptions) -> Result<String, LoadError>
where
    H: HostContext + ?Sized,
{
    Loader::new(options)?.load(host, content).await
}
