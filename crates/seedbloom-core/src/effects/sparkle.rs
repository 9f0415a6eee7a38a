use std::f64::consts::TAU;

use super::Point;

/// Outward speed of a sparkle, in screen units per full step.
pub const SPARKLE_SPEED: f64 = 50.0;

/// Fraction of the velocity applied each frame
const STEP_FRACTION: f64 = 0.05;
const FADE_PER_STEP: f64 = 0.02;
const GROWTH_PER_STEP: f64 = 0.02;

/// Whether a sparkle should still be drawn after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkleState {
    Alive,
    Expired,
}

/// A single point of light drifting away from its burst centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkle {
    pub id: u64,
    /// Burst centre in screen coordinates
    pub origin: Point,
    velocity: Point,
    steps: u32,
}

impl Sparkle {
    /// Create a sparkle heading along `angle` (radians). No step applied yet.
    pub fn new(id: u64, origin: Point, angle: f64) -> Self {
        Self {
            id,
            origin,
            velocity: Point::new(angle.cos() * SPARKLE_SPEED, angle.sin() * SPARKLE_SPEED),
            steps: 0,
        }
    }

    /// Advance one frame.
    pub fn step(&mut self) -> SparkleState {
        if !self.is_expired() {
            self.steps += 1;
        }
        if self.is_expired() {
            SparkleState::Expired
        } else {
            SparkleState::Alive
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Displacement from the origin.
    pub fn offset(&self) -> Point {
        let t = f64::from(self.steps) * STEP_FRACTION;
        Point::new(self.velocity.x * t, self.velocity.y * t)
    }

    pub fn opacity(&self) -> f64 {
        1.0 - f64::from(self.steps) * FADE_PER_STEP
    }

    pub fn scale(&self) -> f64 {
        1.0 + f64::from(self.steps) * GROWTH_PER_STEP
    }

    pub fn is_expired(&self) -> bool {
        self.opacity() <= 0.0
    }
}

/// Spawn `count` sparkles at `center`, evenly spaced around a full circle.
///
/// Ids run from `first_id`. Each sparkle has already taken its first step,
/// so a burst is visible on the frame it is created.
pub fn spawn_burst(center: Point, count: usize, first_id: u64) -> Vec<Sparkle> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            let mut sparkle = Sparkle::new(first_id + i as u64, center, angle);
            sparkle.step();
            sparkle
        })
        .collect()
}
