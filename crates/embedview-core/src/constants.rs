// Layout and camera tuning constants shared by the core and the web frontend.

// Scatter spreads: normalized [0,1] coordinates are centered then scaled by these
pub const SPREAD_3D: f32 = 100.0; // world units across a 3D scatter
pub const SPREAD_2D: f32 = 300.0; // 2D needs more room without depth cues

// 2D scatter z jitter, uniform in [-Z_JITTER, Z_JITTER] (avoids z-fighting)
pub const Z_JITTER: f32 = 0.5;
pub const MAX_Z_JITTER: f32 = 1000.0; // page overrides are capped here

// Grid snap
pub const GRID_CELL_SIZE: f32 = 10.0; // world units per grid cell
pub const GRID_Z_STEP: f32 = 0.001; // deterministic per-cell depth offset, row-major

// Cluster epicenters
pub const EPICENTER_SPREAD: f32 = 120.0; // spacing between neighbouring epicenters
pub const CLUSTER_SPHERE_RADIUS: f32 = 30.0; // members sit on a sphere this size

// Transitions
pub const TRANSITION_DURATION_SEC: f32 = 1.2;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 5000.0;
pub const CAMERA_FIT_PADDING: f32 = 1.1; // 10% breathing room around the layout
pub const MIN_CAMERA_DISTANCE: f32 = 50.0;
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

// Seed for the jitter stream when none is configured
pub const DEFAULT_SEED: u64 = 42;
