// Host-side tests for the cluster epicenter layout.

use embedview_core::*;
use glam::Vec3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn clustered(ids: &[Option<i32>]) -> Vec<EmbeddingItem> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| EmbeddingItem {
            kmeans: *id,
            dbscan: id.map(|c| c % 2),
            ..EmbeddingItem::new(format!("{i}.png"))
        })
        .collect()
}

#[test]
fn nine_clusters_form_a_centered_three_by_three_grid() {
    let ids: Vec<Option<i32>> = (0..27).map(|i| Some(i % 9)).collect();
    let items = clustered(&ids);
    let spread = 50.0;
    let epicenters = compute_epicenters(&items, ClusterAlgorithm::KMeans, spread);
    assert_eq!(epicenters.len(), 9);
    assert_eq!(epicenter_grid_size(9), 3);

    let mut xs: Vec<f32> = epicenters.iter().map(|e| e.position.x).collect();
    let mut ys: Vec<f32> = epicenters.iter().map(|e| e.position.y).collect();
    xs.sort_by(f32::total_cmp);
    ys.sort_by(f32::total_cmp);
    xs.dedup();
    ys.dedup();
    assert_eq!(xs, vec![-spread, 0.0, spread]);
    assert_eq!(ys, vec![-spread, 0.0, spread]);

    let centroid = epicenters.iter().map(|e| e.position).sum::<Vec3>() / 9.0;
    assert!(centroid.abs_diff_eq(Vec3::ZERO, 1e-4));
    for e in &epicenters {
        assert_eq!(e.members, 3);
        assert_eq!(e.position.z, 0.0);
    }
    // first cluster at top-left
    assert_eq!(epicenters[0].position, Vec3::new(-spread, spread, 0.0));
}

#[test]
fn grid_size_is_smallest_enclosing_square() {
    assert_eq!(epicenter_grid_size(0), 0);
    assert_eq!(epicenter_grid_size(1), 1);
    assert_eq!(epicenter_grid_size(2), 2);
    assert_eq!(epicenter_grid_size(4), 2);
    assert_eq!(epicenter_grid_size(5), 3);
    assert_eq!(epicenter_grid_size(10), 4);
}

#[test]
fn epicenters_are_ordered_by_cluster_id() {
    let items = clustered(&[Some(5), Some(-1), Some(2), Some(5), None]);
    let e = compute_epicenters(&items, ClusterAlgorithm::KMeans, 10.0);
    let ids: Vec<i32> = e.iter().map(|c| c.cluster_id).collect();
    assert_eq!(ids, vec![-1, 2, 5]);
    assert_eq!(e[2].members, 2);
    assert!(e.iter().all(|c| c.algorithm == ClusterAlgorithm::KMeans));
}

#[test]
fn single_cluster_sits_on_the_origin() {
    let items = clustered(&[Some(3), Some(3)]);
    let e = compute_epicenters(&items, ClusterAlgorithm::KMeans, 100.0);
    assert_eq!(e.len(), 1);
    assert_eq!(e[0].position, Vec3::ZERO);
}

#[test]
fn fibonacci_points_lie_on_the_sphere() {
    let n = 64;
    let radius = 12.0;
    let pts: Vec<Vec3> = (0..n).map(|i| fibonacci_sphere_point(i, n, radius)).collect();
    for p in &pts {
        assert!(approx(p.length(), radius));
    }
    // roughly balanced coverage: centroid near the center
    let centroid = pts.iter().copied().sum::<Vec3>() / n as f32;
    assert!(centroid.length() < radius * 0.1);
    // first point near one pole, last near the other
    assert!(pts[0].z > radius * 0.9);
    assert!(pts[n - 1].z < -radius * 0.9);
}

#[test]
fn lone_member_sits_on_the_equator() {
    let p = fibonacci_sphere_point(0, 1, 5.0);
    assert!(approx(p.z, 0.0));
    assert!(approx(p.length(), 5.0));
}

#[test]
fn members_surround_their_epicenter() {
    let items = clustered(&[Some(0), Some(1), Some(0), Some(1), Some(0), None]);
    let radius = 7.5;
    let epicenters = compute_epicenters(&items, ClusterAlgorithm::KMeans, 100.0);
    let positions = cluster_layout(&items, ClusterAlgorithm::KMeans, &epicenters, radius);
    assert_eq!(positions.len(), items.len());
    for (item, pos) in items.iter().zip(&positions) {
        match item.kmeans {
            Some(id) => {
                let center = epicenters
                    .iter()
                    .find(|e| e.cluster_id == id)
                    .expect("epicenter")
                    .position;
                assert!(approx(pos.distance(center), radius));
            }
            None => assert_eq!(*pos, Vec3::ZERO),
        }
    }
}

#[test]
fn epicenters_from_another_algorithm_are_ignored() {
    let items = clustered(&[Some(0), Some(1), Some(2), Some(3)]);
    let kmeans = compute_epicenters(&items, ClusterAlgorithm::KMeans, 40.0);
    let positions = cluster_layout(&items, ClusterAlgorithm::Dbscan, &kmeans, 5.0);
    assert!(positions.iter().all(|p| *p == Vec3::ZERO));

    let dbscan = compute_epicenters(&items, ClusterAlgorithm::Dbscan, 40.0);
    assert_eq!(dbscan.len(), 2);
}
