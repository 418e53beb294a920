//! Asset resolution: output paths, variant pairing, emission, module source.

mod descriptor;
pub mod emit;
mod info;
pub mod path;
pub mod source;
pub mod variant;

// Types
pub use descriptor::AssetDescriptor;
pub use info::{AssetInfo, is_immutable_name};
pub use variant::{Dimensions, VariantCandidate};

// Path building (pure functions)
pub use path::{PUBLIC_PATH_GLOBAL, PathBuilder, VARIANT_SUFFIX};

// Emission (side effects)
pub use emit::{PendingAsset, emit_assets};

// Module source
pub use source::module_source;
