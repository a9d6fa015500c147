use std::path::Path;

use image::imageops;
use image::{Rgba, RgbaImage};
use log::debug;

use super::fit::{centered_offset, fit_within};
use super::io::{load_rgba, save_png, AssetIoError};
use super::RESAMPLE_FILTER;
use crate::config::Dimensions;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Scales `src` to fit `bounds` and centers it on a transparent canvas of
/// exactly `bounds`. The sprite's own alpha is kept when compositing.
pub fn fit_sprite(src: &RgbaImage, bounds: Dimensions) -> RgbaImage {
    let source = Dimensions::from(src.dimensions());
    let scaled_size = fit_within(source, bounds);
    let scaled = imageops::resize(src, scaled_size.width, scaled_size.height, RESAMPLE_FILTER);

    let (x, y) = centered_offset(scaled_size, bounds);
    debug!(
        "Sprite {} scaled to {} at offset ({}, {}) in {}",
        source, scaled_size, x, y, bounds
    );

    let mut canvas = RgbaImage::from_pixel(bounds.width, bounds.height, TRANSPARENT);
    imageops::overlay(&mut canvas, &scaled, i64::from(x), i64::from(y));
    canvas
}

/// Sprite policy applied to a file: decode, fit, center, overwrite in place.
pub fn resize_sprite(path: &Path, bounds: Dimensions) -> Result<(), AssetIoError> {
    let canvas = {
        let src = load_rgba(path)?;
        fit_sprite(&src, bounds)
    };
    save_png(path, &canvas)
}
