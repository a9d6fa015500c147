#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use lib_sprite::{Dimensions, Manifest};

/// Opaque image with a color gradient so resampling has something to chew on.
pub fn opaque_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
            255,
        ])
    })
}

pub fn write_png(path: &Path, img: &RgbaImage) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    img.save(path).unwrap();
}

pub fn read_png(path: &Path) -> RgbaImage {
    image::open(path).unwrap().into_rgba8()
}

pub fn dimensions(path: &Path) -> Dimensions {
    Dimensions::from(image::image_dimensions(path).unwrap())
}

/// Writes every file `manifest` names under `root`.
pub fn build_tree(root: &Path, manifest: &Manifest, sprite: Dimensions, background: Dimensions) {
    let sprite_img = opaque_image(sprite.width, sprite.height);
    let background_img = opaque_image(background.width, background.height);

    for fighter in manifest.fighters() {
        for pose in manifest.poses() {
            write_png(&Manifest::sprite_path(root, fighter, pose), &sprite_img);
        }
    }
    for name in manifest.backgrounds() {
        write_png(&Manifest::background_path(root, name), &background_img);
    }
}

/// Bounding box `(x, y, width, height)` of all pixels with non-zero alpha.
pub fn content_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}
