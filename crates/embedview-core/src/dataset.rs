use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One record of the input dataset.
///
/// Every coordinate field is optional so that a partially populated record
/// still takes part in the layouts that do not need the missing field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingItem {
    #[serde(alias = "id")]
    pub filename: String,
    #[serde(default)]
    pub tsne_3d: Option<[f32; 3]>,
    #[serde(default)]
    pub pca_3d: Option<[f32; 3]>,
    #[serde(default)]
    pub tsne_2d: Option<[f32; 2]>,
    #[serde(default)]
    pub pca_2d: Option<[f32; 2]>,
    /// `(column, row)` of the semantic grid cell.
    #[serde(default)]
    pub grid: Option<[i32; 2]>,
    #[serde(default)]
    pub kmeans: Option<i32>,
    #[serde(default)]
    pub agglomerative: Option<i32>,
    #[serde(default)]
    pub dbscan: Option<i32>,
}

impl EmbeddingItem {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    /// Drop real-valued fields that carry a non-finite component.
    pub fn sanitize(&mut self) -> usize {
        let mut dropped = 0;
        dropped += drop_non_finite(&mut self.tsne_3d);
        dropped += drop_non_finite(&mut self.pca_3d);
        dropped += drop_non_finite(&mut self.tsne_2d);
        dropped += drop_non_finite(&mut self.pca_2d);
        dropped
    }
}

fn drop_non_finite<const N: usize>(field: &mut Option<[f32; N]>) -> usize {
    match field {
        Some(v) if v.iter().any(|c| !c.is_finite()) => {
            *field = None;
            1
        }
        _ => 0,
    }
}

/// Which precomputed clustering assignment drives the cluster layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterAlgorithm {
    #[default]
    KMeans,
    Agglomerative,
    Dbscan,
}

impl ClusterAlgorithm {
    pub const ALL: [ClusterAlgorithm; 3] = [
        ClusterAlgorithm::KMeans,
        ClusterAlgorithm::Agglomerative,
        ClusterAlgorithm::Dbscan,
    ];

    #[inline]
    pub fn cluster_of(self, item: &EmbeddingItem) -> Option<i32> {
        match self {
            ClusterAlgorithm::KMeans => item.kmeans,
            ClusterAlgorithm::Agglomerative => item.agglomerative,
            ClusterAlgorithm::Dbscan => item.dbscan,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClusterAlgorithm::KMeans => "kmeans",
            ClusterAlgorithm::Agglomerative => "agglomerative",
            ClusterAlgorithm::Dbscan => "dbscan",
        }
    }
}

impl fmt::Display for ClusterAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusterAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kmeans" => Ok(ClusterAlgorithm::KMeans),
            "agglomerative" | "hierarchical" => Ok(ClusterAlgorithm::Agglomerative),
            "dbscan" => Ok(ClusterAlgorithm::Dbscan),
            other => Err(format!("unknown clustering algorithm '{other}'")),
        }
    }
}

/// Parse a dataset document: a JSON array of records.
///
/// Records that fail to deserialize are skipped, and non-finite coordinate
/// fields are cleared; both are logged rather than failing the document.
pub fn parse_dataset(json: &str) -> Result<Vec<EmbeddingItem>, DatasetError> {
    let root: serde_json::Value = serde_json::from_str(json)?;
    let records = match root {
        serde_json::Value::Array(records) => records,
        serde_json::Value::Object(_) => return Err(DatasetError::NotAnArray("object")),
        serde_json::Value::String(_) => return Err(DatasetError::NotAnArray("string")),
        serde_json::Value::Number(_) => return Err(DatasetError::NotAnArray("number")),
        serde_json::Value::Bool(_) => return Err(DatasetError::NotAnArray("bool")),
        serde_json::Value::Null => return Err(DatasetError::NotAnArray("null")),
    };

    let total = records.len();
    let mut items = Vec::with_capacity(total);
    for (i, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<EmbeddingItem>(record) {
            Ok(mut item) => {
                let dropped = item.sanitize();
                if dropped > 0 {
                    log::warn!(
                        "[dataset] record {} ({}): dropped {} non-finite field(s)",
                        i,
                        item.filename,
                        dropped
                    );
                }
                items.push(item);
            }
            Err(e) => log::warn!("[dataset] skipping record {}: {}", i, e),
        }
    }
    log::info!("[dataset] loaded {} of {} records", items.len(), total);
    Ok(items)
}
