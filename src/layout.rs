// Canvas backing-size policy, kept free of web-sys for host tests.

use super::constants::{FALLBACK_ASPECT, FALLBACK_MAX_WIDTH, FALLBACK_WIDTH_FRACTION};

/// Width and height in whole pixels, as assigned to `canvas.width/height`.
pub type PixelSize = (u32, u32);

#[inline]
fn to_px(v: f64) -> u32 {
    // saturating cast: NaN and negatives become 0
    v as u32
}

/// 16:9 box capped at 700px wide, used while the parent reports no size.
pub fn fallback_canvas_size(inner_width: f64) -> PixelSize {
    let width = (inner_width.max(0.0) * FALLBACK_WIDTH_FRACTION).min(FALLBACK_MAX_WIDTH);
    (to_px(width), to_px(width * FALLBACK_ASPECT))
}

/// Match the CSS box when the parent has been laid out, else fall back.
pub fn canvas_backing_size(
    parent: Option<(f64, f64)>,
    client: (f64, f64),
    inner_width: f64,
) -> PixelSize {
    match parent {
        Some((pw, ph)) if pw > 0.0 && ph > 0.0 => (to_px(client.0), to_px(client.1)),
        _ => fallback_canvas_size(inner_width),
    }
}
