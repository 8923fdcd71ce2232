//! Camera description and the per-mode framing/controls policy.
//!
//! The camera always targets the origin, looking down -Z from a point on the
//! +Z axis. Orbit input itself belongs to the rendering side; this module
//! only decides how far away the camera sits and which interactions the
//! orbit controls should allow for the active layout.

use crate::layout::LayoutMode;
use crate::params::ViewerParams;
use glam::{Mat4, Vec3};
use serde::Serialize;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn looking_at_origin(distance: f32, aspect: f32, params: &ViewerParams) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: params.camera_fovy_deg.to_radians(),
            znear: params.camera_znear,
            zfar: params.camera_zfar,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragAction {
    Rotate,
    Pan,
}

/// Interaction permissions handed to the orbit controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OrbitControls {
    pub enable_rotate: bool,
    pub enable_pan: bool,
    pub enable_zoom: bool,
    pub screen_space_panning: bool,
    pub auto_rotate: bool,
    pub primary_drag: DragAction,
}

impl OrbitControls {
    /// 3D modes orbit freely and honour auto-rotate; 2D modes lock rotation,
    /// pan with the primary button and never auto-rotate.
    pub fn for_mode(mode: LayoutMode, auto_rotate_requested: bool) -> Self {
        if mode.is_3d() {
            Self {
                enable_rotate: true,
                enable_pan: true,
                enable_zoom: true,
                screen_space_panning: false,
                auto_rotate: auto_rotate_requested,
                primary_drag: DragAction::Rotate,
            }
        } else {
            Self {
                enable_rotate: false,
                enable_pan: true,
                enable_zoom: true,
                screen_space_panning: true,
                auto_rotate: false,
                primary_drag: DragAction::Pan,
            }
        }
    }
}

/// Extent of the active layout as seen by the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameExtent {
    /// `max(width, height)` across the screen plane.
    pub planar: f32,
    pub depth: f32,
}

/// Where the camera should sit and what the controls may do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    pub distance: f32,
    pub eye: Vec3,
    pub target: Vec3,
    pub controls: OrbitControls,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPolicy {
    pub fovy_radians: f32,
    pub padding: f32,
    pub min_distance: f32,
}

impl CameraPolicy {
    pub fn from_params(params: &ViewerParams) -> Self {
        Self {
            fovy_radians: params.camera_fovy_deg.to_radians(),
            padding: params.camera_fit_padding,
            min_distance: params.min_camera_distance,
        }
    }

    /// Distance at which `extent` exactly fills the vertical field of view.
    #[inline]
    pub fn fit_distance(&self, extent: f32) -> f32 {
        (extent * 0.5) / (self.fovy_radians * 0.5).tan()
    }

    /// Padded fit distance for `mode`, never closer than `min_distance`.
    /// 3D modes back off by half the depth so the nearest items still fit.
    pub fn distance_for(&self, mode: LayoutMode, extent: FrameExtent) -> f32 {
        let mut d = self.fit_distance(extent.planar.max(0.0));
        if mode.is_3d() {
            d += extent.depth.max(0.0) * 0.5;
        }
        let d = d * self.padding;
        if d.is_finite() {
            d.max(self.min_distance)
        } else {
            self.min_distance
        }
    }

    pub fn frame(&self, mode: LayoutMode, extent: FrameExtent, auto_rotate: bool) -> CameraFrame {
        let distance = self.distance_for(mode, extent);
        CameraFrame {
            distance,
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            controls: OrbitControls::for_mode(mode, auto_rotate),
        }
    }
}
