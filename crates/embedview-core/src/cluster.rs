//! Cluster epicenter layout.
//!
//! Clusters are placed on a square grid of epicenters; members of a cluster
//! are spread over a Fibonacci sphere around their epicenter.

use crate::dataset::{ClusterAlgorithm, EmbeddingItem};
use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;
use std::f32::consts::PI;

type Members = SmallVec<[usize; 16]>;

#[derive(Clone, Debug, PartialEq)]
pub struct ClusterEpicenter {
    pub algorithm: ClusterAlgorithm,
    pub cluster_id: i32,
    pub position: Vec3,
    pub members: usize,
}

fn group_by_cluster(items: &[EmbeddingItem], algorithm: ClusterAlgorithm) -> Vec<(i32, Members)> {
    let mut groups: FnvHashMap<i32, Members> = FnvHashMap::default();
    for (i, item) in items.iter().enumerate() {
        if let Some(id) = algorithm.cluster_of(item) {
            groups.entry(id).or_default().push(i);
        }
    }
    let mut groups: Vec<(i32, Members)> = groups.into_iter().collect();
    groups.sort_unstable_by_key(|(id, _)| *id);
    groups
}

/// Side length of the smallest square grid holding `clusters` cells.
#[inline]
pub fn epicenter_grid_size(clusters: usize) -> usize {
    (clusters as f64).sqrt().ceil() as usize
}

/// Position of the `index`-th epicenter on a `grid_size`² grid centered on
/// the origin, filled row-major from the top-left.
pub fn epicenter_position(index: usize, grid_size: usize, spread: f32) -> Vec3 {
    let g = grid_size.max(1);
    let center = (g as f32 - 1.0) * 0.5;
    let gx = (index % g) as f32;
    let gy = (index / g) as f32;
    Vec3::new((gx - center) * spread, -(gy - center) * spread, 0.0)
}

/// One epicenter per distinct cluster id, in ascending id order.
pub fn compute_epicenters(
    items: &[EmbeddingItem],
    algorithm: ClusterAlgorithm,
    spread: f32,
) -> Vec<ClusterEpicenter> {
    let groups = group_by_cluster(items, algorithm);
    let grid_size = epicenter_grid_size(groups.len());
    let epicenters: Vec<ClusterEpicenter> = groups
        .iter()
        .enumerate()
        .map(|(k, (id, members))| ClusterEpicenter {
            algorithm,
            cluster_id: *id,
            position: epicenter_position(k, grid_size, spread),
            members: members.len(),
        })
        .collect();
    log::debug!(
        "[cluster] {}: {} clusters on a {}x{} grid",
        algorithm,
        epicenters.len(),
        grid_size,
        grid_size
    );
    epicenters
}

/// Point `i` of `n` on a Fibonacci lattice over a sphere of `radius`.
#[inline]
pub fn fibonacci_sphere_point(i: usize, n: usize, radius: f32) -> Vec3 {
    let n = n.max(1) as f32;
    let k = i as f32 + 0.5;
    let phi = (1.0 - 2.0 * k / n).clamp(-1.0, 1.0).acos();
    let theta = PI * (1.0 + 5.0_f32.sqrt()) * k;
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Member positions around the given epicenters. Items with no cluster id for
/// `algorithm`, or whose id has no epicenter, stay at the origin.
pub fn cluster_layout(
    items: &[EmbeddingItem],
    algorithm: ClusterAlgorithm,
    epicenters: &[ClusterEpicenter],
    radius: f32,
) -> Vec<Vec3> {
    let mut positions = vec![Vec3::ZERO; items.len()];
    let anchors: FnvHashMap<i32, Vec3> = epicenters
        .iter()
        .filter(|e| e.algorithm == algorithm)
        .map(|e| (e.cluster_id, e.position))
        .collect();
    for (id, members) in group_by_cluster(items, algorithm) {
        let Some(center) = anchors.get(&id) else {
            continue;
        };
        let n = members.len();
        for (i, &item_index) in members.iter().enumerate() {
            positions[item_index] = *center + fibonacci_sphere_point(i, n, radius);
        }
    }
    positions
}
