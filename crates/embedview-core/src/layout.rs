//! Per-mode target positions.
//!
//! `compute_layout` is a pure function of the items, the active mode, the
//! dataset bounds and the tuning parameters. It never fails: every item
//! missing the field a mode needs gets a defined fallback position.

use crate::bounds::{Bounds2, DatasetBounds, GridBounds};
use crate::cluster::{cluster_layout, ClusterEpicenter};
use crate::constants::MAX_Z_JITTER;
use crate::dataset::{ClusterAlgorithm, EmbeddingItem};
use crate::normalize::{center_and_scale, normalize_point};
use crate::params::ViewerParams;
use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutMode {
    #[default]
    #[serde(rename = "3d", alias = "scatter3d")]
    Scatter3d,
    #[serde(rename = "2d", alias = "scatter2d")]
    Scatter2d,
    #[serde(rename = "grid", alias = "grid2d")]
    Grid2d,
    /// Cluster epicenters, viewed like the 3D scatter.
    #[serde(rename = "clusters")]
    Clusters,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 4] = [
        LayoutMode::Scatter3d,
        LayoutMode::Scatter2d,
        LayoutMode::Grid2d,
        LayoutMode::Clusters,
    ];

    /// Whether the mode is viewed with free orbit rotation.
    #[inline]
    pub fn is_3d(self) -> bool {
        matches!(self, LayoutMode::Scatter3d | LayoutMode::Clusters)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Scatter3d => "3d",
            LayoutMode::Scatter2d => "2d",
            LayoutMode::Grid2d => "grid",
            LayoutMode::Clusters => "clusters",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3d" | "scatter3d" => Ok(LayoutMode::Scatter3d),
            "2d" | "scatter2d" => Ok(LayoutMode::Scatter2d),
            "grid" | "grid2d" => Ok(LayoutMode::Grid2d),
            "clusters" => Ok(LayoutMode::Clusters),
            other => Err(format!("unknown layout mode '{other}'")),
        }
    }
}

/// Which 3D reduced coordinate the 3D scatter reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    #[default]
    Primary,
    Alternate,
}

impl Projection {
    pub const ALL: [Projection; 2] = [Projection::Primary, Projection::Alternate];

    pub fn as_str(self) -> &'static str {
        match self {
            Projection::Primary => "primary",
            Projection::Alternate => "alternate",
        }
    }

    /// The other projection.
    pub fn toggled(self) -> Self {
        match self {
            Projection::Primary => Projection::Alternate,
            Projection::Alternate => Projection::Primary,
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Projection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" | "tsne" => Ok(Projection::Primary),
            "alternate" | "pca" => Ok(Projection::Alternate),
            other => Err(format!("unknown projection '{other}'")),
        }
    }
}

/// Everything besides items, mode and bounds that shapes a layout pass.
#[derive(Clone, Copy, Debug)]
pub struct LayoutOptions<'a> {
    pub params: &'a ViewerParams,
    pub projection: Projection,
    pub cluster_algorithm: ClusterAlgorithm,
    pub epicenters: &'a [ClusterEpicenter],
}

impl<'a> LayoutOptions<'a> {
    pub fn new(params: &'a ViewerParams) -> Self {
        Self {
            params,
            projection: params.projection,
            cluster_algorithm: params.cluster_algorithm,
            epicenters: &[],
        }
    }
}

/// Compute one target position per item, in item order.
///
/// `rng` feeds the 2D scatter z jitter only; the other modes are deterministic.
pub fn compute_layout<R: Rng>(
    items: &[EmbeddingItem],
    mode: LayoutMode,
    bounds: &DatasetBounds,
    opts: &LayoutOptions<'_>,
    rng: &mut R,
) -> Vec<Vec3> {
    let p = opts.params;
    match mode {
        LayoutMode::Scatter3d => items
            .iter()
            .map(|it| scatter_3d_position(it, opts.projection, bounds, p.spread_3d))
            .collect(),
        LayoutMode::Scatter2d => {
            let jitter = clamp_jitter(p.z_jitter);
            items
                .iter()
                .map(|it| {
                    let z = rng.gen_range(-jitter..=jitter);
                    scatter_2d_position(it, bounds.tsne_2d.as_ref(), p.spread_2d, z)
                })
                .collect()
        }
        LayoutMode::Grid2d => items
            .iter()
            .map(|it| grid_position(it, bounds.grid.as_ref(), p.grid_cell_size, p.grid_z_step))
            .collect(),
        LayoutMode::Clusters => cluster_layout(
            items,
            opts.cluster_algorithm,
            opts.epicenters,
            p.cluster_sphere_radius,
        ),
    }
}

#[inline]
fn or_origin(pos: Vec3) -> Vec3 {
    if pos.is_finite() {
        pos
    } else {
        Vec3::ZERO
    }
}

#[inline]
fn finite3(v: Option<[f32; 3]>) -> Option<[f32; 3]> {
    v.filter(|c| c.iter().all(|x| x.is_finite()))
}

#[inline]
fn finite2(v: Option<[f32; 2]>) -> Option<[f32; 2]> {
    v.filter(|c| c.iter().all(|x| x.is_finite()))
}

/// Jitter amplitude `rand` can sample: non-negative, finite, at most `MAX_Z_JITTER`.
#[inline]
pub fn clamp_jitter(z_jitter: f32) -> f32 {
    if z_jitter.is_finite() {
        z_jitter.abs().min(MAX_Z_JITTER)
    } else {
        0.0
    }
}

/// 3D scatter: normalized, centered and scaled by `spread`. Raw coordinate
/// when bounds are unset, origin when the item has no coordinate.
pub fn scatter_3d_position(
    item: &EmbeddingItem,
    projection: Projection,
    bounds: &DatasetBounds,
    spread: f32,
) -> Vec3 {
    let (raw, field_bounds) = match projection {
        Projection::Primary => (item.tsne_3d, bounds.tsne_3d),
        Projection::Alternate => (item.pca_3d, bounds.pca_3d),
    };
    let Some(raw) = finite3(raw) else {
        return Vec3::ZERO;
    };
    let pos = match field_bounds {
        Some(b) if b.is_finite() => {
            let n = normalize_point(raw, &b);
            Vec3::new(
                center_and_scale(n[0], spread),
                center_and_scale(n[1], spread),
                center_and_scale(n[2], spread),
            )
        }
        Some(_) => return Vec3::ZERO,
        None => Vec3::from_array(raw),
    };
    or_origin(pos)
}

/// 2D scatter on the XY plane with the caller's z offset.
pub fn scatter_2d_position(
    item: &EmbeddingItem,
    bounds: Option<&Bounds2>,
    spread: f32,
    z: f32,
) -> Vec3 {
    let Some(raw) = finite2(item.tsne_2d) else {
        return Vec3::ZERO;
    };
    let pos = match bounds {
        Some(b) if b.is_finite() => {
            let n = normalize_point(raw, b);
            Vec3::new(
                center_and_scale(n[0], spread),
                center_and_scale(n[1], spread),
                z,
            )
        }
        Some(_) => return Vec3::ZERO,
        None => Vec3::new(raw[0], raw[1], z),
    };
    or_origin(pos)
}

/// Grid snap: cells laid out row-major with row 0 on top, the whole grid
/// centered on the origin. Each cell gets a small deterministic depth offset.
pub fn grid_position(
    item: &EmbeddingItem,
    bounds: Option<&GridBounds>,
    cell_size: f32,
    z_step: f32,
) -> Vec3 {
    let (Some([col, row]), Some(b)) = (item.grid, bounds) else {
        return Vec3::ZERO;
    };
    let col_rel = (col as i64 - b.min_col as i64) as f32;
    let row_rel = (row as i64 - b.min_row as i64) as f32;
    let width = b.width(cell_size);
    let height = b.height(cell_size);
    let half_cell = cell_size * 0.5;

    let x = col_rel * cell_size - width * 0.5 + half_cell;
    let y = -(row_rel * cell_size - height * 0.5 + half_cell);
    let z = (row_rel * b.cols() as f32 + col_rel) * z_step;
    or_origin(Vec3::new(x, y, z))
}

/// Axis-aligned extent of a computed layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutExtents {
    pub min: Vec3,
    pub max: Vec3,
}

impl LayoutExtents {
    pub fn from_positions(positions: &[Vec3]) -> Self {
        let mut iter = positions.iter().copied().filter(|p| p.is_finite());
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Self { min, max }
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size().x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size().y
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.size().z
    }

    /// Largest extent across the screen plane.
    #[inline]
    pub fn planar(&self) -> f32 {
        self.width().max(self.height())
    }
}
