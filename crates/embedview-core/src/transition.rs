use glam::Vec3;
use std::time::Duration;

/// Ease-out cubic on `[0, 1]`: fast start, gentle arrival.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// A single eased interpolation between two positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: Vec3,
    pub to: Vec3,
    elapsed: f32,
    duration: f32,
}

impl Tween {
    pub fn new(from: Vec3, to: Vec3, duration_sec: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration_sec,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    #[inline]
    pub fn value(&self) -> Vec3 {
        self.from.lerp(self.to, ease_out_cubic(self.progress()))
    }

    #[inline]
    pub fn advance(&mut self, dt_sec: f32) {
        self.elapsed += dt_sec.max(0.0);
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// Drives every item's displayed position toward its layout target.
///
/// Each item tweens independently. A new `animate` call while tweens are in
/// flight starts from wherever each item currently is, so rapid mode toggling
/// retargets instead of queueing.
#[derive(Clone, Debug, Default)]
pub struct Transition {
    positions: Vec<Vec3>,
    tweens: Vec<Option<Tween>>,
}

impl Transition {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Jump straight to `targets`, cancelling any tweens.
    pub fn snap(&mut self, targets: &[Vec3]) {
        self.positions.clear();
        self.positions.extend_from_slice(targets);
        self.tweens.clear();
        self.tweens.resize(targets.len(), None);
    }

    /// Tween from the current positions to `targets` over `duration_sec`.
    ///
    /// A change in item count, or a non-positive duration, snaps instead.
    pub fn animate(&mut self, targets: &[Vec3], duration_sec: f32) {
        if targets.len() != self.positions.len() || duration_sec <= 0.0 {
            self.snap(targets);
            return;
        }
        for ((pos, tween), &target) in self
            .positions
            .iter()
            .zip(self.tweens.iter_mut())
            .zip(targets.iter())
        {
            *tween = Some(Tween::new(*pos, target, duration_sec));
        }
    }

    /// Advance all tweens by `dt`. Returns whether any are still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let dt_sec = dt.as_secs_f32();
        let mut running = false;
        for (pos, slot) in self.positions.iter_mut().zip(self.tweens.iter_mut()) {
            if let Some(tween) = slot {
                tween.advance(dt_sec);
                *pos = tween.value();
                if tween.is_done() {
                    *pos = tween.to;
                    *slot = None;
                } else {
                    running = true;
                }
            }
        }
        running
    }

    pub fn is_animating(&self) -> bool {
        self.tweens.iter().any(Option::is_some)
    }
}
