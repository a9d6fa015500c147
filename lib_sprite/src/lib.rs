pub mod config;
pub mod manifest;
pub mod normalizer;
pub mod resize;

use log::*;
use std::io::Write;

pub use crate::config::{Dimensions, NormalizerConfig};
pub use crate::manifest::{AssetEntry, AssetKind, Manifest};
pub use crate::normalizer::{
    normalize_assets, plan_assets, validate_manifest, NormalizeError, PlannedResize,
};

pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_sprite"), level)
        .filter(Some("sprite_resize"), level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
