//! Detectors are applied by [EventIter] iterators to a stream of feature values.
//! They register detections in the form of a stream of events.
//!
//! [EventIter]: super::iterators::EventIter
pub mod threshold_crossing_detector;

use super::{Event, Real};

pub use threshold_crossing_detector::ThresholdCrossingDetector;

/// Implement for detectors, which take in indexed feature values and output events.
pub trait Detector: Clone {
    /// Takes in the feature value of the window with the given index and possibly outputs an event.
    fn signal(&mut self, index: usize, value: Real) -> Option<Event>;

    /// Call when the feature sequence has been exhausted. If an event is in progress, it is dispatched.
    fn finish(&mut self) -> Option<Event>;
}
