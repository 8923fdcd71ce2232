// Host-side tests for dataset parsing and runtime parameters.

use embedview_core::*;

const SAMPLE: &str = r#"[
  {
    "filename": "cat.jpg",
    "tsne_3d": [1.0, 2.0, 3.0],
    "pca_3d": [0.1, 0.2, 0.3],
    "tsne_2d": [5.0, -5.0],
    "pca_2d": [0.5, 0.5],
    "grid": [3, 7],
    "kmeans": 2,
    "agglomerative": 0,
    "dbscan": -1
  },
  { "id": "dog.jpg", "tsne_2d": [1.5, 2.5] },
  { "filename": "broken.jpg", "grid": ["a", "b"] },
  { "filename": "bare.jpg" }
]"#;

#[test]
fn parses_records_and_tolerates_missing_fields() {
    let items = parse_dataset(SAMPLE).expect("parse");
    assert_eq!(items.len(), 3, "malformed record is skipped");

    let cat = &items[0];
    assert_eq!(cat.filename, "cat.jpg");
    assert_eq!(cat.tsne_3d, Some([1.0, 2.0, 3.0]));
    assert_eq!(cat.grid, Some([3, 7]));
    assert_eq!(cat.dbscan, Some(-1));
    assert_eq!(ClusterAlgorithm::KMeans.cluster_of(cat), Some(2));
    assert_eq!(ClusterAlgorithm::Agglomerative.cluster_of(cat), Some(0));

    let dog = &items[1];
    assert_eq!(dog.filename, "dog.jpg");
    assert_eq!(dog.tsne_3d, None);
    assert_eq!(dog.tsne_2d, Some([1.5, 2.5]));

    assert_eq!(items[2], EmbeddingItem::new("bare.jpg"));
}

#[test]
fn empty_array_is_valid_and_empty() {
    assert!(parse_dataset("[]").expect("parse").is_empty());
}

#[test]
fn non_array_documents_are_rejected() {
    assert!(matches!(
        parse_dataset(r#"{"items": []}"#),
        Err(DatasetError::NotAnArray("object"))
    ));
    assert!(matches!(parse_dataset("null"), Err(DatasetError::NotAnArray("null"))));
    assert!(matches!(parse_dataset("[1, 2"), Err(DatasetError::Json(_))));
}

#[test]
fn sanitize_drops_only_non_finite_fields() {
    let mut item = EmbeddingItem {
        tsne_3d: Some([1.0, f32::NAN, 0.0]),
        pca_3d: Some([1.0, 2.0, 3.0]),
        tsne_2d: Some([f32::INFINITY, 0.0]),
        grid: Some([1, 1]),
        ..EmbeddingItem::new("x")
    };
    assert_eq!(item.sanitize(), 2);
    assert_eq!(item.tsne_3d, None);
    assert_eq!(item.tsne_2d, None);
    assert_eq!(item.pca_3d, Some([1.0, 2.0, 3.0]));
    assert_eq!(item.grid, Some([1, 1]));
    assert_eq!(item.sanitize(), 0);
}

#[test]
fn cluster_algorithm_names() {
    for alg in ClusterAlgorithm::ALL {
        assert_eq!(alg.as_str().parse::<ClusterAlgorithm>(), Ok(alg));
        assert_eq!(alg.to_string(), alg.as_str());
    }
    assert_eq!(
        "hierarchical".parse::<ClusterAlgorithm>(),
        Ok(ClusterAlgorithm::Agglomerative)
    );
    assert!("spectral".parse::<ClusterAlgorithm>().is_err());
}

#[test]
fn params_override_only_what_is_given() {
    let p = ViewerParams::from_json(
        r#"{ "spread_2d": 500.0, "initial_mode": "grid", "cluster_algorithm": "dbscan", "seed": 7 }"#,
    )
    .expect("params");
    assert_eq!(p.spread_2d, 500.0);
    assert_eq!(p.initial_mode, LayoutMode::Grid2d);
    assert_eq!(p.cluster_algorithm, ClusterAlgorithm::Dbscan);
    assert_eq!(p.seed, 7);
    assert_eq!(p.spread_3d, SPREAD_3D);
    assert_eq!(p.min_camera_distance, MIN_CAMERA_DISTANCE);

    assert_eq!(ViewerParams::from_json("{}").expect("empty"), ViewerParams::default());
    assert!(ViewerParams::from_json(r#"{ "initial_mode": "4d" }"#).is_err());
}

#[test]
fn sanitized_params_keep_valid_values() {
    let p = ViewerParams {
        z_jitter: -0.25,
        spread_3d: 250.0,
        ..ViewerParams::default()
    }
    .sanitized();
    assert_eq!(p.z_jitter, 0.25);
    assert_eq!(p.spread_3d, 250.0);
    assert_eq!(ViewerParams::default().sanitized(), ViewerParams::default());

    // JSON overflow parses to infinity, which falls back to the default
    let p = ViewerParams::from_json(r#"{ "spread_3d": 1e39 }"#).expect("params");
    assert_eq!(p.sanitized().spread_3d, SPREAD_3D);
}
