//! Decorative effects.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  particles: ambient motes, spawned once, looped by CSS       │
//! │  sparkle:   radial bursts, stepped per frame until faded     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shake and pulse are plain flags on the [`Surface`](crate::Surface); the
//! renderer's keyframes do the motion.

mod particles;
mod sparkle;

pub use particles::{spawn_particles, Particle};
pub use sparkle::{spawn_burst, Sparkle, SparkleState, SPARKLE_SPEED};

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An on-screen rectangle, as reported by the renderer for an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_center() {
        let b = Bounds::new(10.0, 20.0, 40.0, 60.0);
        assert_eq!(b.center(), Point::new(30.0, 50.0));
    }
}
