use rand::Rng;

/// One ambient mote. Fire-and-forget: it loops in the renderer for the
/// rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal start position, percent of the host width
    pub left_percent: f64,
    /// Animation start delay in seconds (0-8)
    pub delay_secs: f64,
    /// Animation duration in seconds (6-10)
    pub duration_secs: f64,
}

/// Spawn `count` particles with randomised placement and timing.
pub fn spawn_particles<R: Rng>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left_percent: rng.random_range(0.0..100.0),
            delay_secs: rng.random_range(0.0..8.0),
            duration_secs: rng.random_range(6.0..10.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = spawn_particles(500, &mut rng);
        assert_eq!(particles.len(), 500);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_percent));
            assert!((0.0..8.0).contains(&p.delay_secs));
            assert!((6.0..10.0).contains(&p.duration_secs));
        }
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(spawn_particles(0, &mut rng).is_empty());
    }
}
