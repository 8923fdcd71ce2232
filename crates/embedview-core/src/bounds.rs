//! Per-field coordinate extents.
//!
//! Each coordinate field gets its own linear min/max scan. The passes are kept
//! separate (one per field) since datasets are small and loaded once.

use crate::dataset::EmbeddingItem;

/// Per-axis `(min, max, range)` for an `N`-dimensional coordinate field.
///
/// `range` is never zero: an axis on which every item shares one value is
/// given a unit range so normalization yields a constant 0 instead of NaN.
/// A span too wide for `f32` saturates at `f32::MAX`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds<const N: usize> {
    pub min: [f32; N],
    pub max: [f32; N],
    pub range: [f32; N],
}

pub type Bounds3 = AxisBounds<3>;
pub type Bounds2 = AxisBounds<2>;

impl<const N: usize> AxisBounds<N> {
    /// Build bounds from extrema, coercing zero-width axes to a unit range.
    pub fn from_extrema(min: [f32; N], max: [f32; N]) -> Self {
        let mut range = [1.0; N];
        for axis in 0..N {
            let span = max[axis] - min[axis];
            if span.is_infinite() {
                range[axis] = f32::MAX;
            } else if span != 0.0 {
                range[axis] = span;
            }
        }
        Self { min, max, range }
    }

    pub fn is_finite(&self) -> bool {
        self.min
            .iter()
            .chain(self.max.iter())
            .chain(self.range.iter())
            .all(|v| v.is_finite())
    }
}

/// Scan `items` once, tracking running extrema of the field picked by
/// `selector`. Items without the field, or with a non-finite component, are
/// skipped. Returns `None` when nothing contributed.
pub fn compute_bounds<const N: usize, F>(items: &[EmbeddingItem], selector: F) -> Option<AxisBounds<N>>
where
    F: Fn(&EmbeddingItem) -> Option<[f32; N]>,
{
    let mut extrema: Option<([f32; N], [f32; N])> = None;
    for item in items {
        let Some(v) = selector(item) else {
            continue;
        };
        if v.iter().any(|c| !c.is_finite()) {
            continue;
        }
        match &mut extrema {
            None => extrema = Some((v, v)),
            Some((min, max)) => {
                for axis in 0..N {
                    if v[axis] < min[axis] {
                        min[axis] = v[axis];
                    }
                    if v[axis] > max[axis] {
                        max[axis] = v[axis];
                    }
                }
            }
        }
    }
    extrema.map(|(min, max)| AxisBounds::from_extrema(min, max))
}

#[inline]
pub fn compute_bounds_3d<F>(items: &[EmbeddingItem], selector: F) -> Option<Bounds3>
where
    F: Fn(&EmbeddingItem) -> Option<[f32; 3]>,
{
    compute_bounds(items, selector)
}

#[inline]
pub fn compute_bounds_2d<F>(items: &[EmbeddingItem], selector: F) -> Option<Bounds2>
where
    F: Fn(&EmbeddingItem) -> Option<[f32; 2]>,
{
    compute_bounds(items, selector)
}

/// Column/row extrema of the integer grid field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridBounds {
    pub min_col: i32,
    pub max_col: i32,
    pub min_row: i32,
    pub max_row: i32,
}

impl GridBounds {
    /// Number of columns spanned, inclusive.
    #[inline]
    pub fn cols(&self) -> u32 {
        (self.max_col as i64 - self.min_col as i64 + 1).max(1) as u32
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        (self.max_row as i64 - self.min_row as i64 + 1).max(1) as u32
    }

    pub fn width(&self, cell_size: f32) -> f32 {
        self.cols() as f32 * cell_size
    }

    pub fn height(&self, cell_size: f32) -> f32 {
        self.rows() as f32 * cell_size
    }
}

/// Extrema of every item's grid cell. With no grid cells at all the bounds
/// collapse to `(0,0)-(0,0)` and a warning is logged.
pub fn compute_grid_bounds(items: &[EmbeddingItem]) -> GridBounds {
    let mut out: Option<GridBounds> = None;
    for [col, row] in items.iter().filter_map(|it| it.grid) {
        match &mut out {
            None => {
                out = Some(GridBounds {
                    min_col: col,
                    max_col: col,
                    min_row: row,
                    max_row: row,
                })
            }
            Some(b) => {
                b.min_col = b.min_col.min(col);
                b.max_col = b.max_col.max(col);
                b.min_row = b.min_row.min(row);
                b.max_row = b.max_row.max(row);
            }
        }
    }
    out.unwrap_or_else(|| {
        log::warn!("[bounds] no item carries a grid cell; grid bounds default to (0,0)-(0,0)");
        GridBounds::default()
    })
}

/// Bounds for every bounded coordinate field of a dataset.
///
/// `None` marks a field whose bounds are unset (empty dataset, or no item has
/// the field); layouts fall back to raw or origin positions in that case.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DatasetBounds {
    pub tsne_3d: Option<Bounds3>,
    pub pca_3d: Option<Bounds3>,
    pub tsne_2d: Option<Bounds2>,
    pub grid: Option<GridBounds>,
}

impl DatasetBounds {
    pub fn compute(items: &[EmbeddingItem]) -> Self {
        if items.is_empty() {
            return Self::default();
        }
        let bounds = Self {
            tsne_3d: compute_bounds_3d(items, |it| it.tsne_3d),
            pca_3d: compute_bounds_3d(items, |it| it.pca_3d),
            tsne_2d: compute_bounds_2d(items, |it| it.tsne_2d),
            grid: Some(compute_grid_bounds(items)),
        };
        log::debug!("[bounds] {:?}", bounds);
        bounds
    }
}
