use crate::bounds::AxisBounds;

/// Map `raw` into `[0, 1]` relative to an axis' `min` and `range`.
///
/// No clamping: values outside the scanned bounds land outside `[0, 1]`.
/// Arithmetic runs in `f64` so coordinates near `f32::MAX` don't overflow.
#[inline]
pub fn normalize(raw: f32, min: f32, range: f32) -> f32 {
    ((raw as f64 - min as f64) / range as f64) as f32
}

/// Normalize each axis against the true `max - min` span, which may exceed
/// the saturated `range` stored for very wide axes.
#[inline]
pub fn normalize_point<const N: usize>(raw: [f32; N], bounds: &AxisBounds<N>) -> [f32; N] {
    let mut out = [0.0; N];
    for axis in 0..N {
        let min = bounds.min[axis] as f64;
        let span = bounds.max[axis] as f64 - min;
        let range = if span == 0.0 { 1.0 } else { span };
        out[axis] = ((raw[axis] as f64 - min) / range) as f32;
    }
    out
}

/// Shift a normalized value so 0.5 sits at the origin, then scale to `spread`.
#[inline]
pub fn center_and_scale(normalized: f32, spread: f32) -> f32 {
    (normalized - 0.5) * spread
}
