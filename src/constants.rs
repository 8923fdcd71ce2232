// Page wiring and frame-loop constants.
// Element ids are the contract with `index.html`; keep them in sync.
use embedview_core::LayoutMode;

// Canvas the renderer draws into; also carries the data-* configuration
pub const CANVAS_ID: &str = "viewer-canvas";
pub const DATASET_URL_ATTR: &str = "data-dataset-url";
pub const PARAMS_ATTR: &str = "data-viewer-params";
pub const DEFAULT_DATASET_URL: &str = "data/embeddings.json";

// Mode-select buttons, in the order they appear on the page
pub const MODE_BUTTONS: [(&str, LayoutMode); 4] = [
    ("mode-3d", LayoutMode::Scatter3d),
    ("mode-2d", LayoutMode::Scatter2d),
    ("mode-grid", LayoutMode::Grid2d),
    ("mode-clusters", LayoutMode::Clusters),
];
pub const ACTIVE_CLASS: &str = "active";

pub const AUTO_ROTATE_ID: &str = "auto-rotate";
pub const CLUSTER_SELECT_ID: &str = "cluster-algorithm";
pub const PROJECTION_SELECT_ID: &str = "projection";

// Overlays
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const NO_CONTENT_ID: &str = "no-content";
pub const STATUS_ID: &str = "status";

// Frame loop
// Cap per-frame time step so a backgrounded tab doesn't skip a whole transition
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
