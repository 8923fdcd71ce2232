// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use embedview_core::LayoutMode;
use input::*;

#[test]
fn digit_keys_select_modes() {
    assert_eq!(action_for_key("1"), Some(KeyAction::SetMode(LayoutMode::Scatter3d)));
    assert_eq!(action_for_key("2"), Some(KeyAction::SetMode(LayoutMode::Scatter2d)));
    assert_eq!(action_for_key("3"), Some(KeyAction::SetMode(LayoutMode::Grid2d)));
    assert_eq!(action_for_key("4"), Some(KeyAction::SetMode(LayoutMode::Clusters)));
}

#[test]
fn r_toggles_auto_rotate_in_either_case() {
    assert_eq!(action_for_key("r"), Some(KeyAction::ToggleAutoRotate));
    assert_eq!(action_for_key("R"), Some(KeyAction::ToggleAutoRotate));
}

#[test]
fn p_toggles_projection_in_either_case() {
    assert_eq!(action_for_key("p"), Some(KeyAction::ToggleProjection));
    assert_eq!(action_for_key("P"), Some(KeyAction::ToggleProjection));
}

#[test]
fn other_keys_do_nothing() {
    for key in ["0", "5", "x", "Enter", " ", ""] {
        assert_eq!(action_for_key(key), None, "key {key:?}");
    }
}

#[test]
fn frame_dt_is_clamped() {
    assert_eq!(clamp_frame_dt(0.016, 0.1), 0.016);
    assert_eq!(clamp_frame_dt(3.0, 0.1), 0.1);
    assert_eq!(clamp_frame_dt(-1.0, 0.1), 0.0);
    assert_eq!(clamp_frame_dt(f32::NAN, 0.1), 0.0);
}

#[test]
fn aspect_handles_collapsed_canvas() {
    assert_eq!(aspect_of(1920, 1080), 1920.0 / 1080.0);
    assert_eq!(aspect_of(0, 1080), 1.0);
    assert_eq!(aspect_of(800, 0), 1.0);
}
