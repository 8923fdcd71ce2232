//! The viewer's application state.
//!
//! `Viewer` owns everything the layout and camera logic needs: the dataset,
//! its bounds, the active mode, the in-flight transition and the camera. It
//! has no platform dependencies; the web frontend reads positions and camera
//! updates out of it each frame and hands them to the renderer.

use crate::bounds::DatasetBounds;
use crate::camera::{Camera, CameraPolicy, FrameExtent, OrbitControls};
use crate::cluster::{compute_epicenters, ClusterEpicenter};
use crate::constants::DEFAULT_ASPECT;
use crate::dataset::{ClusterAlgorithm, EmbeddingItem};
use crate::layout::{compute_layout, LayoutExtents, LayoutMode, LayoutOptions, Projection};
use crate::params::ViewerParams;
use crate::transition::{Transition, Tween};
use glam::Vec3;
use rand::prelude::*;
use std::time::Duration;

/// Camera state the renderer should apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraUpdate {
    pub eye: Vec3,
    pub target: Vec3,
    pub controls: OrbitControls,
}

pub struct Viewer {
    items: Vec<EmbeddingItem>,
    bounds: DatasetBounds,
    params: ViewerParams,
    policy: CameraPolicy,
    mode: LayoutMode,
    projection: Projection,
    cluster_algorithm: ClusterAlgorithm,
    epicenters: Vec<ClusterEpicenter>,
    targets: Vec<Vec3>,
    transition: Transition,
    camera: Camera,
    camera_tween: Option<Tween>,
    controls: OrbitControls,
    auto_rotate: bool,
    rng: StdRng,
    loaded: bool,
    camera_dirty: bool,
    layout_revision: u64,
}

impl Viewer {
    pub fn new(items: Vec<EmbeddingItem>, params: ViewerParams) -> Self {
        let params = params.sanitized();
        let bounds = DatasetBounds::compute(&items);
        let epicenters =
            compute_epicenters(&items, params.cluster_algorithm, params.epicenter_spread);
        let policy = CameraPolicy::from_params(&params);
        let camera = Camera::looking_at_origin(policy.min_distance, DEFAULT_ASPECT, &params);
        if items.is_empty() {
            log::warn!("[viewer] dataset is empty; nothing to lay out");
        } else {
            log::info!("[viewer] {} items, initial mode {}", items.len(), params.initial_mode);
        }
        Self {
            bounds,
            policy,
            mode: params.initial_mode,
            projection: params.projection,
            cluster_algorithm: params.cluster_algorithm,
            epicenters,
            targets: Vec::new(),
            transition: Transition::new(),
            camera,
            camera_tween: None,
            controls: OrbitControls::for_mode(params.initial_mode, params.auto_rotate),
            auto_rotate: params.auto_rotate,
            rng: StdRng::seed_from_u64(params.seed),
            loaded: false,
            camera_dirty: true,
            layout_revision: 0,
            items,
            params,
        }
    }

    /// True when there is nothing to show; the frontend displays a
    /// "no content" state and every layout operation is a no-op.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[EmbeddingItem] {
        &self.items
    }

    pub fn bounds(&self) -> &DatasetBounds {
        &self.bounds
    }

    pub fn params(&self) -> &ViewerParams {
        &self.params
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn cluster_algorithm(&self) -> ClusterAlgorithm {
        self.cluster_algorithm
    }

    pub fn epicenters(&self) -> &[ClusterEpicenter] {
        &self.epicenters
    }

    /// Whether the first layout pass has run.
    pub fn is_ready(&self) -> bool {
        self.loaded
    }

    /// First layout pass once the renderer has its assets; snaps into place.
    /// Later calls do nothing.
    pub fn on_assets_loaded(&mut self) {
        if self.loaded || self.is_empty() {
            return;
        }
        self.loaded = true;
        self.relayout(false);
    }

    /// Switch layouts. Re-selecting the active mode re-lays out.
    pub fn set_mode(&mut self, mode: LayoutMode) {
        if mode != self.mode {
            log::info!("[viewer] mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        self.controls = OrbitControls::for_mode(mode, self.auto_rotate);
        self.camera_dirty = true;
        if self.loaded {
            self.relayout(true);
        }
    }

    pub fn set_projection(&mut self, projection: Projection) {
        if projection == self.projection {
            return;
        }
        log::info!("[viewer] projection {} -> {}", self.projection, projection);
        self.projection = projection;
        if self.loaded && self.mode == LayoutMode::Scatter3d {
            self.relayout(true);
        }
    }

    pub fn set_cluster_algorithm(&mut self, algorithm: ClusterAlgorithm) {
        if algorithm == self.cluster_algorithm {
            return;
        }
        self.cluster_algorithm = algorithm;
        self.epicenters = compute_epicenters(&self.items, algorithm, self.params.epicenter_spread);
        if self.loaded && self.mode == LayoutMode::Clusters {
            self.relayout(true);
        }
    }

    /// Request auto-rotation. Only takes effect while a 3D mode is active.
    pub fn set_auto_rotate(&mut self, on: bool) {
        self.auto_rotate = on;
        self.controls = OrbitControls::for_mode(self.mode, on);
        self.camera_dirty = true;
    }

    pub fn auto_rotate_requested(&self) -> bool {
        self.auto_rotate
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }

    /// Advance in-flight transitions. Returns whether anything is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let items_moving = self.transition.tick(dt);
        let mut camera_moving = false;
        if let Some(tween) = &mut self.camera_tween {
            tween.advance(dt.as_secs_f32());
            self.camera.eye = tween.value();
            self.camera_dirty = true;
            if tween.is_done() {
                self.camera.eye = tween.to;
                self.camera_tween = None;
            } else {
                camera_moving = true;
            }
        }
        items_moving || camera_moving
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_animating() || self.camera_tween.is_some()
    }

    /// Currently displayed position of every item, in dataset order.
    pub fn positions(&self) -> &[Vec3] {
        self.transition.positions()
    }

    /// Displayed positions as a flat `[x, y, z, x, y, z, ...]` buffer.
    pub fn positions_f32(&self) -> &[f32] {
        bytemuck::cast_slice(self.transition.positions())
    }

    /// Bumped on every layout pass, so callers can tell when positions were
    /// replaced without an animation.
    pub fn layout_revision(&self) -> u64 {
        self.layout_revision
    }

    /// Where the active layout puts every item once transitions settle.
    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn controls(&self) -> OrbitControls {
        self.controls
    }

    /// Camera state to push to the renderer, if it changed since last taken.
    pub fn take_camera_update(&mut self) -> Option<CameraUpdate> {
        if !self.camera_dirty {
            return None;
        }
        self.camera_dirty = false;
        Some(CameraUpdate {
            eye: self.camera.eye,
            target: self.camera.target,
            controls: self.controls,
        })
    }

    fn relayout(&mut self, animate: bool) {
        if self.is_empty() {
            return;
        }
        let opts = LayoutOptions {
            params: &self.params,
            projection: self.projection,
            cluster_algorithm: self.cluster_algorithm,
            epicenters: &self.epicenters,
        };
        self.targets = compute_layout(&self.items, self.mode, &self.bounds, &opts, &mut self.rng);

        self.layout_revision += 1;
        let duration = self.params.transition_duration_sec;
        if animate {
            self.transition.animate(&self.targets, duration);
        } else {
            self.transition.snap(&self.targets);
        }

        let frame = self
            .policy
            .frame(self.mode, self.frame_extent(), self.auto_rotate);
        self.controls = frame.controls;
        self.camera.target = frame.target;
        if animate && duration > 0.0 {
            self.camera_tween = Some(Tween::new(self.camera.eye, frame.eye, duration));
        } else {
            self.camera.eye = frame.eye;
            self.camera_tween = None;
        }
        self.camera_dirty = true;
        log::debug!(
            "[viewer] layout {} ({} items), camera distance {:.1}",
            self.mode,
            self.targets.len(),
            frame.distance
        );
    }

    fn frame_extent(&self) -> FrameExtent {
        match (self.mode, self.bounds.grid) {
            (LayoutMode::Grid2d, Some(grid)) => {
                let cell = self.params.grid_cell_size;
                FrameExtent {
                    planar: grid.width(cell).max(grid.height(cell)),
                    depth: 0.0,
                }
            }
            _ => {
                let extents = LayoutExtents::from_positions(&self.targets);
                FrameExtent {
                    planar: extents.planar(),
                    depth: extents.depth(),
                }
            }
        }
    }
}
