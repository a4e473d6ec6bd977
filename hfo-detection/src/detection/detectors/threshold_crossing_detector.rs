use super::{Detector, Event, Real};
use crate::detection::WindowSchedule;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Below the threshold.
    #[default]
    Scanning,
    /// At or above the threshold since window `first`, `last` being the most recent window seen.
    InEvent { first: usize, last: usize },
}

/// Emits an event for every run of consecutive windows whose feature value reaches the threshold.
///
/// Consecutive windows at or above the threshold merge into a single event. An event starts at
/// the first sample of the run's first window, and stops at the end of the first window after
/// the run, clamped to the signal length. When windows overlap, two runs separated by a short gap
/// can produce overlapping intervals, these are coalesced so that emitted events never overlap.
#[derive(Debug, Clone)]
pub struct ThresholdCrossingDetector {
    threshold: Real,
    schedule: WindowSchedule,
    state: State,
    /// The most recent event, held back until it is known not to overlap the next.
    pending: Option<Event>,
}

impl ThresholdCrossingDetector {
    /// # Parameters
    /// - threshold: values at or above this are part of an event.
    /// - schedule: the schedule of the windows the feature values were computed from.
    pub fn new(threshold: Real, schedule: WindowSchedule) -> Self {
        Self {
            threshold,
            schedule,
            state: State::default(),
            pending: None,
        }
    }

    /// Stores the event as pending, merging it into the current pending event if they overlap.
    /// Returns the previously pending event if it is complete.
    fn coalesce(&mut self, event: Event) -> Option<Event> {
        match self.pending.take() {
            Some(pending) if event.start < pending.stop => {
                self.pending = Some(Event::new(pending.start, pending.stop.max(event.stop)));
                None
            }
            completed => {
                self.pending = Some(event);
                completed
            }
        }
    }
}

impl Detector for ThresholdCrossingDetector {
    fn signal(&mut self, index: usize, value: Real) -> Option<Event> {
        let reached = value >= self.threshold;
        match (self.state, reached) {
            (State::Scanning, true) => {
                self.state = State::InEvent {
                    first: index,
                    last: index,
                };
                None
            }
            (State::Scanning, false) => None,
            (State::InEvent { first, .. }, true) => {
                self.state = State::InEvent { first, last: index };
                None
            }
            (State::InEvent { first, .. }, false) => {
                self.state = State::Scanning;
                self.coalesce(self.schedule.event_bounds(first, index))
            }
        }
    }

    /// Dispatches at most one event per call, returns [None] once everything has been dispatched.
    fn finish(&mut self) -> Option<Event> {
        if let State::InEvent { first, last } = std::mem::take(&mut self.state) {
            let completed = self.coalesce(self.schedule.event_bounds(first, last + 1));
            if completed.is_some() {
                return completed;
            }
        }
        self.pending.take()
    }
}
