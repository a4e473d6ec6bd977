//! Events produced by the detectors, and the fixed record schema they are exported as.
use super::Real;
use crate::error::DetectionError;
use std::fmt::{Display, Formatter, Result};

/// Names and element types of the fields of an [EventRecord].
pub const FIELDS: [(&str, &str); 2] = [("event_start", "int32"), ("event_stop", "int32")];

/// A detected event, as a half-open interval `[start, stop)` of sample indices.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Event {
    /// Index of the first sample in the event.
    pub start: usize,
    /// Index one past the last sample in the event.
    pub stop: usize,
}

impl Event {
    pub fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    /// Number of samples spanned by the event.
    pub fn duration(&self) -> usize {
        self.stop.saturating_sub(self.start)
    }

    /// Converts the event bounds from sample indices to seconds.
    /// # Parameters
    /// - fs: the sampling frequency of the signal the event was detected in.
    pub fn to_seconds(&self, fs: Real) -> (Real, Real) {
        (self.start as Real / fs, self.stop as Real / fs)
    }

    /// Returns true if the interval `[start, stop)` lies entirely within this event.
    pub fn covers(&self, start: usize, stop: usize) -> bool {
        self.start <= start && stop <= self.stop
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{},{}", self.start, self.stop)
    }
}

/// Events in ascending, non-overlapping order.
pub type EventList = Vec<Event>;

/// An [Event] in the exported two field schema, see [FIELDS].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRecord {
    pub event_start: i32,
    pub event_stop: i32,
}

impl TryFrom<Event> for EventRecord {
    type Error = DetectionError;

    fn try_from(event: Event) -> std::result::Result<Self, Self::Error> {
        let out_of_range = || DetectionError::EventOutOfRange {
            start: event.start,
            stop: event.stop,
        };
        Ok(EventRecord {
            event_start: i32::try_from(event.start).map_err(|_| out_of_range())?,
            event_stop: i32::try_from(event.stop).map_err(|_| out_of_range())?,
        })
    }
}

impl Display for EventRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{},{}", self.event_start, self.event_stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn event_in_seconds() {
        let (start, stop) = Event::new(2500, 5000).to_seconds(5000.0);
        assert_approx_eq!(start, 0.5);
        assert_approx_eq!(stop, 1.0);
    }

    #[test]
    fn covers() {
        let event = Event::new(1975, 2250);
        assert_eq!(event.duration(), 275);
        assert!(event.covers(2000, 2200));
        assert!(!event.covers(1950, 2200));
        assert!(!event.covers(2000, 2251));
    }

    #[test]
    fn record_conversion() {
        let record = EventRecord::try_from(Event::new(10, 110)).unwrap();
        assert_eq!(record.event_start, 10);
        assert_eq!(record.event_stop, 110);
        assert_eq!(record.to_string(), "10,110");
    }

    #[test]
    fn record_conversion_out_of_range() {
        let stop = i32::MAX as usize + 1;
        assert!(matches!(
            EventRecord::try_from(Event::new(0, stop)),
            Err(DetectionError::EventOutOfRange { start: 0, stop: s }) if s == stop
        ));
    }
}
