use crate::constants::*;
use crate::dataset::ClusterAlgorithm;
use crate::layout::{clamp_jitter, LayoutMode, Projection};
use serde::{Deserialize, Serialize};

/// Runtime tuning for the viewer. Every field defaults to the value in
/// `constants.rs`, so a page only needs to override what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerParams {
    pub spread_3d: f32,
    pub spread_2d: f32,
    pub z_jitter: f32,
    pub grid_cell_size: f32,
    pub grid_z_step: f32,
    pub epicenter_spread: f32,
    pub cluster_sphere_radius: f32,
    pub transition_duration_sec: f32,
    pub camera_fovy_deg: f32,
    pub camera_znear: f32,
    pub camera_zfar: f32,
    pub camera_fit_padding: f32,
    pub min_camera_distance: f32,
    pub seed: u64,
    pub initial_mode: LayoutMode,
    pub projection: Projection,
    pub cluster_algorithm: ClusterAlgorithm,
    pub auto_rotate: bool,
}

impl Default for ViewerParams {
    fn default() -> Self {
        Self {
            spread_3d: SPREAD_3D,
            spread_2d: SPREAD_2D,
            z_jitter: Z_JITTER,
            grid_cell_size: GRID_CELL_SIZE,
            grid_z_step: GRID_Z_STEP,
            epicenter_spread: EPICENTER_SPREAD,
            cluster_sphere_radius: CLUSTER_SPHERE_RADIUS,
            transition_duration_sec: TRANSITION_DURATION_SEC,
            camera_fovy_deg: CAMERA_FOVY_DEG,
            camera_znear: CAMERA_ZNEAR,
            camera_zfar: CAMERA_ZFAR,
            camera_fit_padding: CAMERA_FIT_PADDING,
            min_camera_distance: MIN_CAMERA_DISTANCE,
            seed: DEFAULT_SEED,
            initial_mode: LayoutMode::Scatter3d,
            projection: Projection::Primary,
            cluster_algorithm: ClusterAlgorithm::KMeans,
            auto_rotate: false,
        }
    }
}

impl ViewerParams {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace non-finite tuning values with their defaults and cap the z
    /// jitter, so page-supplied overrides can't drive the layout into NaN
    /// positions or an unsampleable jitter range.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fields = [
            (&mut self.spread_3d, defaults.spread_3d),
            (&mut self.spread_2d, defaults.spread_2d),
            (&mut self.z_jitter, defaults.z_jitter),
            (&mut self.grid_cell_size, defaults.grid_cell_size),
            (&mut self.grid_z_step, defaults.grid_z_step),
            (&mut self.epicenter_spread, defaults.epicenter_spread),
            (&mut self.cluster_sphere_radius, defaults.cluster_sphere_radius),
            (&mut self.transition_duration_sec, defaults.transition_duration_sec),
            (&mut self.camera_fovy_deg, defaults.camera_fovy_deg),
            (&mut self.camera_znear, defaults.camera_znear),
            (&mut self.camera_zfar, defaults.camera_zfar),
            (&mut self.camera_fit_padding, defaults.camera_fit_padding),
            (&mut self.min_camera_distance, defaults.min_camera_distance),
        ];
        for (value, default) in fields {
            if !value.is_finite() {
                log::warn!("[params] non-finite value replaced by default {}", default);
                *value = default;
            }
        }
        let jitter = clamp_jitter(self.z_jitter);
        if jitter != self.z_jitter {
            log::warn!("[params] z_jitter {} clamped to {}", self.z_jitter, jitter);
            self.z_jitter = jitter;
        }
        self
    }
}
