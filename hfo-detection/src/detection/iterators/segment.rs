//! Provides an iterator over the windows of a [WindowSchedule].
use crate::detection::{Real, WindowSchedule};

/// Yields `(window index, window samples)` for every window of a schedule, in order.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    samples: &'a [Real],
    schedule: WindowSchedule,
    index: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = (usize, &'a [Real]);

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.schedule.window(self.index)?;
        let window = self.samples.get(range)?;
        let index = self.index;
        self.index += 1;
        Some((index, window))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.schedule.n_windows().saturating_sub(self.index);
        (0, Some(remaining))
    }
}

/// Provides method for splitting samples into the windows of a schedule.
pub trait SegmentIterable<'a> {
    /// Creates an iterator over the windows of the schedule.
    fn segments(self, schedule: WindowSchedule) -> Segments<'a>;
}

impl<'a> SegmentIterable<'a> for &'a [Real] {
    fn segments(self, schedule: WindowSchedule) -> Segments<'a> {
        Segments {
            samples: self,
            schedule,
            index: 0,
        }
    }
}
