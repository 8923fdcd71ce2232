// Host-side tests for position transitions.

use embedview_core::*;
use glam::Vec3;
use std::time::Duration;

fn secs(s: f32) -> Duration {
    Duration::from_secs_f32(s)
}

#[test]
fn ease_out_cubic_endpoints_and_shape() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    // clamps outside [0, 1]
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
    // ease-out runs ahead of linear
    for i in 1..10 {
        let t = i as f32 / 10.0;
        assert!(ease_out_cubic(t) > t);
    }
}

#[test]
fn snap_assigns_targets_directly() {
    let mut tr = Transition::new();
    let targets = vec![Vec3::X, Vec3::Y, Vec3::Z];
    tr.snap(&targets);
    assert_eq!(tr.positions(), &targets[..]);
    assert!(!tr.is_animating());
    assert!(!tr.tick(secs(0.1)));
}

#[test]
fn animate_moves_toward_target_and_lands_exactly() {
    let mut tr = Transition::new();
    tr.snap(&[Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]);
    let targets = [Vec3::new(100.0, 0.0, 0.0), Vec3::new(10.0, -50.0, 0.0)];
    tr.animate(&targets, 1.0);
    assert!(tr.is_animating());
    // nothing moves until time passes
    assert_eq!(tr.positions()[0], Vec3::ZERO);

    assert!(tr.tick(secs(0.5)));
    let halfway = tr.positions()[0].x;
    assert!((halfway - 87.5).abs() < 1e-3, "eased halfway = {halfway}");

    assert!(!tr.tick(secs(0.6)));
    assert_eq!(tr.positions(), &targets[..]);
    assert!(!tr.is_animating());
}

#[test]
fn retarget_mid_flight_starts_from_current_position() {
    let mut tr = Transition::new();
    tr.snap(&[Vec3::ZERO]);
    tr.animate(&[Vec3::new(100.0, 0.0, 0.0)], 1.0);
    tr.tick(secs(0.5));
    let mid = tr.positions()[0];

    tr.animate(&[Vec3::new(0.0, 100.0, 0.0)], 1.0);
    // no jump at the moment of retargeting
    assert_eq!(tr.positions()[0], mid);
    tr.tick(secs(0.25));
    let p = tr.positions()[0];
    assert!(p.x < mid.x && p.x > 0.0);
    assert!(p.y > 0.0);

    tr.tick(secs(1.0));
    assert_eq!(tr.positions()[0], Vec3::new(0.0, 100.0, 0.0));
}

#[test]
fn item_count_change_or_zero_duration_snaps() {
    let mut tr = Transition::new();
    tr.snap(&[Vec3::ZERO]);
    tr.animate(&[Vec3::X, Vec3::Y], 1.0);
    assert_eq!(tr.len(), 2);
    assert!(!tr.is_animating());

    tr.animate(&[Vec3::Z, Vec3::Z], 0.0);
    assert_eq!(tr.positions(), &[Vec3::Z, Vec3::Z][..]);
    assert!(!tr.is_animating());
}

#[test]
fn tween_progress_is_clamped() {
    let mut tw = Tween::new(Vec3::ZERO, Vec3::ONE, 2.0);
    assert_eq!(tw.progress(), 0.0);
    tw.advance(1.0);
    assert_eq!(tw.progress(), 0.5);
    tw.advance(-5.0);
    assert_eq!(tw.progress(), 0.5);
    tw.advance(10.0);
    assert!(tw.is_done());
    assert_eq!(tw.value(), Vec3::ONE);
}
