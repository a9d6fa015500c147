use std::path::Path;

use image::imageops;
use image::RgbaImage;
use log::debug;

use super::io::{load_rgba, save_png, AssetIoError};
use super::RESAMPLE_FILTER;
use crate::config::Dimensions;

/// Resizes to exactly `target`, stretching if the aspect ratios differ.
pub fn stretch_background(src: &RgbaImage, target: Dimensions) -> RgbaImage {
    debug!(
        "Background {} stretched to {}",
        Dimensions::from(src.dimensions()),
        target
    );
    imageops::resize(src, target.width, target.height, RESAMPLE_FILTER)
}

pub fn resize_background(path: &Path, target: Dimensions) -> Result<(), AssetIoError> {
    let resized = {
        let src = load_rgba(path)?;
        stretch_background(&src, target)
    };
    save_png(path, &resized)
}
