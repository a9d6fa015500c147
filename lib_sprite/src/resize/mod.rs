pub mod background;
pub mod fit;
pub mod io;
pub mod sprite;

use image::imageops::FilterType;

pub use background::{resize_background, stretch_background};
pub use fit::{centered_offset, fit_within};
pub use io::{load_rgba, save_png, AssetIoError};
pub use sprite::{fit_sprite, resize_sprite};

/// Resampling filter shared by both policies.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;
