//! Timed step queue on a simulated clock.
//!
//! The scene sequence is a chain of fixed delays. Instead of wall-clock
//! timers, each delay becomes a step queued on a [`Timeline`]; whoever owns
//! the timeline moves its clock forward and runs whatever came due. Tests
//! advance the clock directly; the desktop front-end advances it from a
//! frame loop.
//!
//! While a step is being run the clock reads that step's due time, so steps
//! it schedules are relative to when it was due, not to when the owner
//! happened to poll.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

/// A step waiting on the timeline
#[derive(Debug)]
struct TimedStep<T> {
    /// Clock reading at which the step runs
    due: Duration,
    /// Scheduling order, breaks ties between equal due times
    seq: u64,
    step: T,
}

impl<T> PartialEq for TimedStep<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T> Eq for TimedStep<T> {}

impl<T> PartialOrd for TimedStep<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TimedStep<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Ordered queue of timed steps with its own clock.
#[derive(Debug)]
pub struct Timeline<T> {
    now: Duration,
    steps: BinaryHeap<TimedStep<T>>,
    next_seq: u64,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            steps: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Current clock reading.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `step` to run `delay` after the current clock reading.
    /// Returns the due time.
    pub fn schedule(&mut self, delay: Duration, step: T) -> Duration {
        let due = self.now + delay;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.steps.push(TimedStep { due, seq, step });
        due
    }

    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }

    /// Pop the earliest step if it is due at or before `until`, moving the
    /// clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        if self.steps.peek()?.due > until {
            return None;
        }
        let next = self.steps.pop()?;
        self.now = self.now.max(next.due);
        Some(next.step)
    }

    /// Move the clock to `until` once every due step has been popped.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Pop every step due within `delta`, then settle. No chaining.
    fn drain<T>(timeline: &mut Timeline<T>, delta: Duration) -> Vec<T> {
        let until = timeline.now() + delta;
        let mut due = Vec::new();
        while let Some(step) = timeline.pop_due(until) {
            due.push(step);
        }
        timeline.settle(until);
        due
    }

    #[test]
    fn test_runs_in_due_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(300), "c");
        timeline.schedule(ms(100), "a");
        timeline.schedule(ms(200), "b");

        assert_eq!(drain(&mut timeline, ms(1000)), vec!["a", "b", "c"]);
        assert!(timeline.is_idle());
        assert_eq!(timeline.now(), ms(1000));
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let mut timeline = Timeline::new();
        for i in 0..5 {
            timeline.schedule(ms(50), i);
        }
        assert_eq!(drain(&mut timeline, ms(50)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_not_due_stays_queued() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(500), ());

        assert!(drain(&mut timeline, ms(499)).is_empty());
        assert_eq!(timeline.steps.len(), 1);
        assert_eq!(timeline.steps.peek().map(|s| s.due), Some(ms(500)));

        assert_eq!(drain(&mut timeline, ms(1)).len(), 1);
    }

    #[test]
    fn test_chained_steps_are_relative_to_due_time() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(400), 1);

        let until = ms(10_000);
        let mut ran = Vec::new();
        while let Some(step) = timeline.pop_due(until) {
            ran.push((step, timeline.now()));
            if step < 3 {
                timeline.schedule(ms(100), step + 1);
            }
        }
        timeline.settle(until);

        assert_eq!(ran, vec![(1, ms(400)), (2, ms(500)), (3, ms(600))]);
        assert_eq!(timeline.now(), until);
    }

    #[test]
    fn test_zero_delay_runs_on_next_advance() {
        let mut timeline = Timeline::new();
        timeline.schedule(Duration::ZERO, "now");
        assert_eq!(drain(&mut timeline, Duration::ZERO), vec!["now"]);
    }
}
