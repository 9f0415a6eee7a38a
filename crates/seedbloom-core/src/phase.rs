//! Scene phase tracking.

use std::fmt;

/// Which part of the experience is on screen.
///
/// | Phase | Meaning |
/// |-------|---------|
/// | Entry | Name card is shown, waiting for a name |
/// | Planting | Name accepted, garden revealed, seed going into the soil |
/// | Growing | Stem has grown; terminal |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ScenePhase {
    #[default]
    Entry,
    Planting,
    Growing,
}

impl ScenePhase {
    /// Move forward to `next`. Returns false and leaves the phase alone if
    /// `next` is not strictly later.
    pub fn advance_to(&mut self, next: ScenePhase) -> bool {
        if next <= *self {
            tracing::debug!(current = %self, requested = %next, "Ignoring non-forward phase change");
            return false;
        }
        tracing::debug!(from = %self, to = %next, "Scene phase advanced");
        *self = next;
        true
    }

    /// Whether the garden (petals, centre) is reachable.
    pub fn garden_open(&self) -> bool {
        !matches!(self, ScenePhase::Entry)
    }
}

impl fmt::Display for ScenePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenePhase::Entry => write!(f, "entry"),
            ScenePhase::Planting => write!(f, "planting"),
            ScenePhase::Growing => write!(f, "growing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only() {
        let mut phase = ScenePhase::default();
        assert!(phase.advance_to(ScenePhase::Planting));
        assert!(phase.advance_to(ScenePhase::Growing));
        assert!(!phase.advance_to(ScenePhase::Planting));
        assert!(!phase.advance_to(ScenePhase::Growing));
        assert_eq!(phase, ScenePhase::Growing);
    }

    #[test]
    fn test_may_skip_forward() {
        let mut phase = ScenePhase::Entry;
        assert!(phase.advance_to(ScenePhase::Growing));
        assert!(!phase.advance_to(ScenePhase::Entry));
    }

    #[test]
    fn test_garden_open() {
        assert!(!ScenePhase::Entry.garden_open());
        assert!(ScenePhase::Planting.garden_open());
        assert!(ScenePhase::Growing.garden_open());
    }
}
