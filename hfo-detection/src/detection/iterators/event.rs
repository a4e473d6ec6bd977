//! Provides the event iterator and the trait for converting feature value iterators into event iterators.
use crate::detection::{Detector, Event, Real};
use tracing::trace;

/// Applies a detector to a source iterator of `(window index, feature value)` pairs.
#[derive(Clone)]
pub struct EventIter<I, D>
where
    I: Iterator<Item = (usize, Real)>,
    D: Detector,
{
    /// The data to apply the detector to.
    source: I,
    /// The detector to apply.
    detector: D,
}

impl<I, D> Iterator for EventIter<I, D>
where
    I: Iterator<Item = (usize, Real)>,
    D: Detector,
{
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.source.next() {
                Some((index, value)) => {
                    if let Some(event) = self.detector.signal(index, value) {
                        trace!("Event found {event:?}");
                        return Some(event);
                    }
                }
                None => {
                    return self.detector.finish().inspect(|event| {
                        trace!("Event found at end of sequence {event:?}");
                    });
                }
            }
        }
    }
}

/// Should be implemented for any iterator which supports the `events` method.
pub trait EventFilter<I, D>
where
    I: Iterator<Item = (usize, Real)>,
    D: Detector,
{
    fn events(self, detector: D) -> EventIter<I, D>;
}

impl<I, D> EventFilter<I, D> for I
where
    I: Iterator<Item = (usize, Real)>,
    D: Detector,
{
    /// Create an [EventIter] iterator, which applies a detector to a feature source as it is consumed.
    ///
    /// # Parameters
    /// - detector: A detector which is to be applied as the iterator is consumed.
    fn events(self, detector: D) -> EventIter<I, D> {
        EventIter {
            source: self,
            detector,
        }
    }
}
