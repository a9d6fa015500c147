use std::path::{Path, PathBuf};

use log::{error, info};
use thiserror::Error;

use crate::config::{Dimensions, NormalizerConfig};
use crate::manifest::{AssetEntry, AssetKind};
use crate::resize::fit::fit_within;
use crate::resize::io::read_dimensions;
use crate::resize::{resize_background, resize_sprite, AssetIoError};

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Missing asset: {}", .0.display())]
    MissingAsset(PathBuf),
    #[error("Missing {} asset(s): {}", .0.len(), join_paths(.0))]
    MissingAssets(Vec<PathBuf>),
    #[error(transparent)]
    Asset(#[from] AssetIoError),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// What a run would do to one asset, without doing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedResize {
    pub entry: AssetEntry,
    pub source: Dimensions,
    /// Size of the resampled image before it is placed on the output.
    pub scaled: Dimensions,
    pub output: Dimensions,
}

/// Rewrites every manifest file to its target size, in manifest order.
///
/// Stops at the first missing or unreadable file. Files handled before the
/// failure stay rewritten.
pub fn normalize_assets(config: &NormalizerConfig) -> Result<(), NormalizeError> {
    info!("Normalizing assets under {}", config.root.display());

    let entries = config.manifest.entries(&config.root);
    for entry in &entries {
        ensure_exists(&entry.path)?;

        match entry.kind {
            AssetKind::Sprite { .. } => resize_sprite(&entry.path, config.sprite_box)?,
            AssetKind::Background { .. } => {
                resize_background(&entry.path, config.background_size)?
            }
        }
        info!("Normalized {}", entry);
    }

    info!("Normalized {} assets", entries.len());
    Ok(())
}

/// Checks that every manifest file exists, touching nothing.
pub fn validate_manifest(config: &NormalizerConfig) -> Result<(), NormalizeError> {
    let missing = config.manifest.missing(&config.root);
    if missing.is_empty() {
        info!("All {} assets present", config.manifest.len());
        return Ok(());
    }

    for path in &missing {
        error!("Missing asset: {}", path.display());
    }
    Err(NormalizeError::MissingAssets(missing))
}

/// Reads each manifest file's header and reports the sizes a run would
/// produce. Nothing is written.
pub fn plan_assets(config: &NormalizerConfig) -> Result<Vec<PlannedResize>, NormalizeError> {
    config
        .manifest
        .entries(&config.root)
        .into_iter()
        .map(|entry| {
            ensure_exists(&entry.path)?;
            let source = read_dimensions(&entry.path)?;
            let (scaled, output) = match entry.kind {
                AssetKind::Sprite { .. } => {
                    (fit_within(source, config.sprite_box), config.sprite_box)
                }
                AssetKind::Background { .. } => (config.background_size, config.background_size),
            };
            Ok(PlannedResize {
                entry,
                source,
                scaled,
                output,
            })
        })
        .collect()
}

fn ensure_exists(path: &Path) -> Result<(), NormalizeError> {
    if path.is_file() {
        return Ok(());
    }
    error!("Missing asset: {}", path.display());
    Err(NormalizeError::MissingAsset(path.to_path_buf()))
}
