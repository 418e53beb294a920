//! Dusk - content-addressed asset loader with dark-mode variant pairing.
//!
//! Given the bytes of a source asset, dusk derives a content-addressed output
//! name, looks for a `<stem>_dark<ext>` sibling, checks both images have the
//! same pixel size, emits the asset(s) to the host's store and returns module
//! source referencing them:
//!
//! ```text
//! export default __webpack_public_path__ + "3f1c…9a.png";
//! export default { light: __webpack_public_path__ + "3f1c…9a.png",
//!                  dark: __webpack_public_path__ + "3f1c…9a_dark.png" };
//! ```
//!
//! # Example
//!
//! ```no_run
//! use dusk::{LoaderOptions, MemoryHost, load};
//!
//! # async fn run() -> Result<(), dusk::LoadError> {
//! let content = std::fs::read("/site/img/logo.png").unwrap_or_default();
//! let host = MemoryHost::new("/site", "/site/img/logo.png");
//! let source = load(&host, &content, LoaderOptions::default()).await?;
//! println!("{source}");
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod config;
pub mod error;
pub mod host;
pub mod loader;
pub mod logger;
pub mod template;
pub mod utils;

pub use asset::{AssetDescriptor, AssetInfo, Dimensions};
pub use config::{
    ConfigError, ConfigFile, LoaderOptions, NameOption, PathOption, PostTransform, VariantPolicy,
};
pub use error::LoadError;
pub use host::{FsHost, HostContext, MemoryHost};
pub use loader::{Loader, Resolution, load};
pub use template::{Interpolator, NameInterpolator, TemplateContext, TemplateError};
