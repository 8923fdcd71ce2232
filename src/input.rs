use embedview_core::LayoutMode;

/// What a key press asks the viewer to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    SetMode(LayoutMode),
    ToggleAutoRotate,
    ToggleProjection,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "1" => Some(KeyAction::SetMode(LayoutMode::Scatter3d)),
        "2" => Some(KeyAction::SetMode(LayoutMode::Scatter2d)),
        "3" => Some(KeyAction::SetMode(LayoutMode::Grid2d)),
        "4" => Some(KeyAction::SetMode(LayoutMode::Clusters)),
        "r" | "R" => Some(KeyAction::ToggleAutoRotate),
        "p" | "P" => Some(KeyAction::ToggleProjection),
        _ => None,
    }
}

/// Clamp a raw frame delta into `[0, max_sec]`.
#[inline]
pub fn clamp_frame_dt(dt_sec: f32, max_sec: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, max_sec)
    } else {
        0.0
    }
}

/// Aspect ratio of a backing store, falling back to 1 for a collapsed canvas.
#[inline]
pub fn aspect_of(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}
