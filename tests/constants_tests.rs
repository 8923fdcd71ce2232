// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use embedview_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_positive() {
    assert!(SPREAD_3D > 0.0);
    assert!(SPREAD_2D > 0.0);
    assert!(GRID_CELL_SIZE > 0.0);
    assert!(EPICENTER_SPREAD > 0.0);
    assert!(CLUSTER_SPHERE_RADIUS > 0.0);
    assert!(TRANSITION_DURATION_SEC > 0.0);
    assert!(MIN_CAMERA_DISTANCE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_have_logical_relationships() {
    // 2D scatter needs more room than 3D without depth cues
    assert!(SPREAD_2D > SPREAD_3D);

    // Depth offsets must stay far below the visible scale
    assert!(Z_JITTER < GRID_CELL_SIZE);
    assert!(GRID_Z_STEP > 0.0 && GRID_Z_STEP < Z_JITTER);
    assert!(MAX_Z_JITTER >= Z_JITTER);

    // Neighbouring cluster spheres should not overlap
    assert!(2.0 * CLUSTER_SPHERE_RADIUS < EPICENTER_SPREAD);

    // Padding enlarges, field of view is a sane perspective
    assert!(CAMERA_FIT_PADDING > 1.0);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
}

#[test]
fn every_mode_has_exactly_one_button() {
    for mode in LayoutMode::ALL {
        assert_eq!(MODE_BUTTONS.iter().filter(|(_, m)| *m == mode).count(), 1);
    }
    let mut ids: Vec<&str> = MODE_BUTTONS.iter().map(|(id, _)| *id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), MODE_BUTTONS.len());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_step_cap_is_shorter_than_a_transition() {
    assert!(MAX_FRAME_DT_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC < TRANSITION_DURATION_SEC);
}
