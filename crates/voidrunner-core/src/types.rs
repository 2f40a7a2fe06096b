//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DT, FIELD_HEIGHT, FIELD_WIDTH, TIMER_EPSILON};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * DT;
    }
}

/// Decrement a countdown timer, flooring at zero.
///
/// Values within `TIMER_EPSILON` of zero snap to exactly zero, so a timer set
/// to `n * DT` expires on the n-th call.
pub fn tick_down(timer: f64, dt: f64) -> f64 {
    let next = timer - dt;
    if next <= TIMER_EPSILON {
        0.0
    } else {
        next
    }
}

/// Circle-circle overlap test.
pub fn circles_overlap(a: DVec2, ra: f64, b: DVec2, rb: f64) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Whether a point lies inside (or on) a circle.
pub fn point_in_circle(p: DVec2, center: DVec2, radius: f64) -> bool {
    p.distance_squared(center) <= radius * radius
}

/// Clamp a circle's centre so it stays fully inside the field.
pub fn clamp_to_field(pos: DVec2, radius: f64) -> DVec2 {
    DVec2::new(
        pos.x.clamp(radius, FIELD_WIDTH - radius),
        pos.y.clamp(radius, FIELD_HEIGHT - radius),
    )
}

/// Whether a point lies within the field expanded by `margin` on every side.
pub fn in_field(pos: DVec2, margin: f64) -> bool {
    pos.x >= -margin
        && pos.x <= FIELD_WIDTH + margin
        && pos.y >= -margin
        && pos.y <= FIELD_HEIGHT + margin
}

/// Centre of the play field.
pub fn field_center() -> DVec2 {
    DVec2::new(FIELD_WIDTH * 0.5, FIELD_HEIGHT * 0.5)
}

/// Unit vector for an angle (radians, screen coordinates).
pub fn unit_from_angle(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Directions of a projectile fan centred on `heading`.
///
/// `count` bullets are spaced `spread` radians apart, symmetric about the
/// heading.
pub fn fan_directions(heading: DVec2, count: u32, spread: f64) -> Vec<DVec2> {
    let base = heading.y.atan2(heading.x);
    let mid = (count.saturating_sub(1)) as f64 * 0.5;
    (0..count)
        .map(|i| unit_from_angle(base + (i as f64 - mid) * spread))
        .collect()
}
