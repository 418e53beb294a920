//! Dark-mode variant detection and validation.
//!
//! A resource `img/logo.png` is paired with `img/logo_dark.png` when that
//! file exists next to it. Under [`VariantPolicy::Validate`] both images must
//! have identical pixel dimensions, otherwise the whole invocation fails.
//!
//! Absence of the sibling is the only non-fatal outcome besides acceptance:
//! probe and read failures abort the invocation.

use std::fmt;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use image::{ImageError, ImageReader};
use serde::Serialize;

use crate::config::VariantPolicy;
use crate::error::LoadError;
use crate::utils::path::{insert_suffix, relative_path, to_slash};

use super::path::VARIANT_SUFFIX;

/// Pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"{{"width":{},"height":{}}}"#, self.width, self.height)
    }
}

/// Source filename of `resource_path` relative to `root`, forward slashes.
pub fn source_filename(root: &Path, resource_path: &Path) -> String {
    to_slash(&relative_path(root, resource_path))
}

/// A `<stem>_dark<ext>` sibling found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantCandidate {
    /// Absolute path of the sibling.
    pub path: PathBuf,
    /// Sibling filename relative to the root context.
    pub source_filename: String,
}

/// Look for the dark sibling of the resource whose relative name is
/// `source_filename`.
pub fn find_variant(resource_path: &Path, source_filename: &str) -> Option<VariantCandidate> {
    let file_name = resource_path.file_name()?.to_str()?;
    let path = resource_path.with_file_name(insert_suffix(file_name, VARIANT_SUFFIX));

    path.is_file().then(|| VariantCandidate {
        path,
        source_filename: insert_suffix(source_filename, VARIANT_SUFFIX),
    })
}

/// Probe the dimensions of an image held in memory.
pub async fn probe_bytes(label: &Path, content: Vec<u8>) -> Result<Dimensions, LoadError> {
    let result = tokio::task::spawn_blocking(move || {
        ImageReader::new(Cursor::new(content))
            .with_guessed_format()?
            .into_dimensions()
    })
    .await;
    into_dimensions(label, result)
}

/// Probe the dimensions of an image file.
pub async fn probe_file(path: &Path) -> Result<Dimensions, LoadError> {
    let owned = path.to_path_buf();
    let result = tokio::task::spawn_blocking(move || {
        ImageReader::open(&owned)?
            .with_guessed_format()?
            .into_dimensions()
    })
    .await;
    into_dimensions(path, result)
}

fn into_dimensions(
    path: &Path,
    result: Result<Result<(u32, u32), ImageError>, tokio::task::JoinError>,
) -> Result<Dimensions, LoadError> {
    result
        .map_err(|join| ImageError::IoError(io::Error::other(join)))
        .and_then(|probed| probed)
        .map(Dimensions::from)
        .map_err(|source| LoadError::Probe {
            path: path.to_path_buf(),
            source,
        })
}

/// Accept or reject a found candidate according to `policy`.
///
/// Both probes run concurrently. On acceptance the sibling's bytes are
/// returned, ready to be emitted.
pub async fn accept_variant(
    policy: VariantPolicy,
    resource_path: &Path,
    primary_filename: &str,
    content: &[u8],
    candidate: &VariantCandidate,
) -> Result<Vec<u8>, LoadError> {
    if policy == VariantPolicy::Validate {
        let (primary, alternate) = tokio::try_join!(
            probe_bytes(resource_path, content.to_vec()),
            probe_file(&candidate.path)
        )?;

        if primary != alternate {
            return Err(LoadError::DimensionMismatch {
                primary,
                alternate,
                primary_path: primary_filename.to_string(),
                alternate_path: candidate.source_filename.clone(),
            });
        }
        crate::debug!("variant"; "{} matches {} ({})", candidate.source_filename, primary_filename, primary);
    }

    tokio::fs::read(&candidate.path)
        .await
        .map_err(|err| LoadError::Io(candidate.path.clone(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;
    use std::fs;
    use tempfile::TempDir;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::new(width, height).save(path).unwrap();
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_dimensions_display() {
        assert_eq!(Dimensions::new(100, 50).to_string(), r#"{"width":100,"height":50}"#);
    }

    #[test]
    fn test_source_filename() {
        assert_eq!(
            source_filename(Path::new("/site"), Path::new("/site/img/logo.png")),
            "img/logo.png"
        );
    }

    #[test]
    fn test_find_variant_absent() {
        let dir = TempDir::new().unwrap();
        let resource = dir.path().join("logo.png");
        fs::write(&resource, "x").unwrap();

        assert!(find_variant(&resource, "logo.png").is_none());
    }

    #[test]
    fn test_find_variant_present() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("img")).unwrap();
        let resource = dir.path().join("img/logo.png");
        fs::write(&resource, "x").unwrap();
        fs::write(dir.path().join("img/logo_dark.png"), "y").unwrap();

        let candidate = find_variant(&resource, "img/logo.png").unwrap();
        assert_eq!(candidate.path, dir.path().join("img/logo_dark.png"));
        assert_eq!(candidate.source_filename, "img/logo_dark.png");
    }

    #[test]
    fn test_find_variant_ignores_directories() {
        let dir = TempDir::new().unwrap();
        let resource = dir.path().join("logo.png");
        fs::write(&resource, "x").unwrap();
        fs::create_dir_all(dir.path().join("logo_dark.png")).unwrap();

        assert!(find_variant(&resource, "logo.png").is_none());
    }

    #[tokio::test]
    async fn test_probe_file_and_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.png");
        write_png(&path, 7, 3);

        assert_eq!(probe_file(&path).await.unwrap(), Dimensions::new(7, 3));
        assert_eq!(
            probe_bytes(&path, png_bytes(5, 9)).await.unwrap(),
            Dimensions::new(5, 9)
        );
    }

    #[tokio::test]
    async fn test_probe_non_image_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fake.png");
        fs::write(&path, "not an image").unwrap();

        let err = probe_file(&path).await.unwrap_err();
        assert!(matches!(err, LoadError::Probe { path: p, .. } if p == path));
    }

    #[tokio::test]
    async fn test_accept_matching_sizes() {
        let dir = TempDir::new().unwrap();
        let resource = dir.path().join("logo.png");
        write_png(&dir.path().join("logo_dark.png"), 10, 4);
        let candidate = VariantCandidate {
            path: dir.path().join("logo_dark.png"),
            source_filename: "logo_dark.png".into(),
        };

        let bytes = accept_variant(
            VariantPolicy::Validate,
            &resource,
            "logo.png",
            &png_bytes(10, 4),
            &candidate,
        )
        .await
        .unwrap();
        assert_eq!(bytes, fs::read(&candidate.path).unwrap());
    }

    #[tokio::test]
    async fn test_reject_mismatched_sizes() {
        let dir = TempDir::new().unwrap();
        let resource = dir.path().join("logo.png");
        write_png(&dir.path().join("logo_dark.png"), 10, 3);
        let candidate = VariantCandidate {
            path: dir.path().join("logo_dark.png"),
            source_filename: "logo_dark.png".into(),
        };

        let err = accept_variant(
            VariantPolicy::Validate,
            &resource,
            "logo.png",
            &png_bytes(10, 4),
            &candidate,
        )
        .await
        .unwrap_err();

        match err {
            LoadError::DimensionMismatch {
                primary,
                alternate,
                primary_path,
                alternate_path,
            } => {
                assert_eq!(primary, Dimensions::new(10, 4));
                assert_eq!(alternate, Dimensions::new(10, 3));
                assert_eq!(primary_path, "logo.png");
                assert_eq!(alternate_path, "logo_dark.png");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unchecked_skips_probe() {
        let dir = TempDir::new().unwrap();
        let resource = dir.path().join("logo.png");
        fs::write(dir.path().join("logo_dark.png"), "not an image").unwrap();
        let candidate = VariantCandidate {
            path: dir.path().join("logo_dark.png"),
            source_filename: "logo_dark.png".into(),
        };

        let bytes = accept_variant(
            VariantPolicy::Unchecked,
            &resource,
            "logo.png",
            b"also not an image",
            &candidate,
        )
        .await
        .unwrap();
        assert_eq!(bytes, b"not an image");
    }
}
