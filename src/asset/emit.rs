//! Hand finished assets to the host store.

use crate::error::LoadError;
use crate::host::HostContext;

use super::AssetDescriptor;

/// An asset ready to be written: where it goes and its bytes.
#[derive(Debug, Clone, Copy)]
pub struct PendingAsset<'a> {
    pub descriptor: &'a AssetDescriptor,
    pub content: &'a [u8],
}

impl<'a> PendingAsset<'a> {
    pub fn new(descriptor: &'a AssetDescriptor, content: &'a [u8]) -> Self {
        Self {
            descriptor,
            content,
        }
    }
}

/// Emit each asset exactly once, in the given order.
///
/// Callers pass the alternate before the primary. Returns the number of
/// emitted files.
pub fn emit_assets<H>(host: &H, assets: &[PendingAsset<'_>]) -> Result<usize, LoadError>
where
    H: HostContext + ?Sized,
{
    for asset in assets {
        let descriptor = asset.descriptor;
        host.emit_file(
            &descriptor.output_path,
            asset.content,
            None,
            &descriptor.info(),
        )
        .map_err(|err| LoadError::Emit(descriptor.output_path.clone(), err))?;
    }
    Ok(assets.len())
}
