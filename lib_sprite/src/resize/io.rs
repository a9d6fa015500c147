use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{ImageError, ImageFormat, RgbaImage};
use log::{debug, error, warn};
use thiserror::Error;

use crate::config::Dimensions;

const TEMP_SUFFIX: &str = ".tmp";

#[derive(Error, Debug)]
pub enum AssetIoError {
    #[error("Failed to decode {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("Failed to encode {}: {}", .path.display(), .source)]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("Failed to replace {}: {}", .path.display(), .source)]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AssetIoError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Decode { path, .. } | Self::Encode { path, .. } | Self::Replace { path, .. } => {
                path
            }
        }
    }
}

/// Decodes any supported format and converts it to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, AssetIoError> {
    let decoded = image::open(path).map_err(|source| {
        error!("Could not decode {}: {}", path.display(), source);
        AssetIoError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(
        "Loaded {} ({:?}, {})",
        path.display(),
        decoded.color(),
        Dimensions::new(decoded.width(), decoded.height())
    );
    Ok(decoded.into_rgba8())
}

/// Reads only the header to get the size of an image on disk.
pub fn read_dimensions(path: &Path) -> Result<Dimensions, AssetIoError> {
    image::image_dimensions(path)
        .map(Dimensions::from)
        .map_err(|source| AssetIoError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes `img` as PNG to a sibling temp file, then renames it over `path`.
pub fn save_png(path: &Path, img: &RgbaImage) -> Result<(), AssetIoError> {
    let tmp = temp_path(path);

    if let Err(source) = img.save_with_format(&tmp, ImageFormat::Png) {
        error!("Could not encode {}: {}", tmp.display(), source);
        remove_temp(&tmp);
        return Err(AssetIoError::Encode {
            path: path.to_path_buf(),
            source,
        });
    }

    fs::rename(&tmp, path).map_err(|source| {
        error!("Could not move {} into place: {}", tmp.display(), source);
        remove_temp(&tmp);
        AssetIoError::Replace {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!("Wrote {} ({})", path.display(), Dimensions::from(img.dimensions()));
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

fn remove_temp(tmp: &Path) {
    if let Err(e) = fs::remove_file(tmp) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!("Could not remove {}: {}", tmp.display(), e);
        }
    }
}
