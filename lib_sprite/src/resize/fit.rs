use crate::config::Dimensions;

/// Largest size with the aspect ratio of `src` that fits inside `bounds`.
///
/// The scale factor is `min(bounds.w / src.w, bounds.h / src.h)`, so the more
/// constraining side lands exactly on the box edge and the other side is
/// rounded to the nearest pixel. Smaller sources are scaled up to the box.
/// Neither side drops below one pixel.
pub fn fit_within(src: Dimensions, bounds: Dimensions) -> Dimensions {
    if src.width == 0 || src.height == 0 {
        return Dimensions::new(src.width.min(bounds.width), src.height.min(bounds.height));
    }

    let (sw, sh) = (u64::from(src.width), u64::from(src.height));
    let (bw, bh) = (u64::from(bounds.width), u64::from(bounds.height));

    // bw / sw <= bh / sh, cross-multiplied
    if bw * sh <= bh * sw {
        let height = (2 * sh * bw + sw) / (2 * sw);
        Dimensions::new(bounds.width, clamp_side(height, bounds.height))
    } else {
        let width = (2 * sw * bh + sh) / (2 * sh);
        Dimensions::new(clamp_side(width, bounds.width), bounds.height)
    }
}

fn clamp_side(side: u64, max: u32) -> u32 {
    side.clamp(1, u64::from(max.max(1))) as u32
}

/// Top-left corner that centers `inner` inside `outer`. Odd leftovers go to
/// the right and bottom margins.
pub fn centered_offset(inner: Dimensions, outer: Dimensions) -> (u32, u32) {
    (
        outer.width.saturating_sub(inner.width) / 2,
        outer.height.saturating_sub(inner.height) / 2,
    )
}
