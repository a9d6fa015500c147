mod common;

use common::{dimensions, opaque_image, write_png};
use lib_sprite::resize::{resize_background, stretch_background};
use lib_sprite::Dimensions;
use tempfile::TempDir;

const TARGET: Dimensions = Dimensions::new(600, 400);

#[test]
fn test_stretch_background_ignores_aspect() {
    let out = stretch_background(&opaque_image(100, 100), TARGET);
    assert_eq!(out.dimensions(), (600, 400));
    assert!(out.pixels().all(|pixel| pixel[3] >= 254));
}

#[test]
fn test_stretch_background_downscale() {
    let out = stretch_background(&opaque_image(1920, 1080), TARGET);
    assert_eq!(out.dimensions(), (600, 400));
}

#[test]
fn test_resize_background_same_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("arena_bg.png");
    write_png(&path, &opaque_image(600, 400));

    resize_background(&path, TARGET).unwrap();

    assert_eq!(dimensions(&path), TARGET);
}

#[test]
fn test_resize_background_overwrites_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("title_bg.png");
    write_png(&path, &opaque_image(320, 90));

    resize_background(&path, TARGET).unwrap();

    assert_eq!(dimensions(&path), TARGET);
    assert!(!dir.path().join("title_bg.png.tmp").exists());
}
