//! Splits a signal into overlapping windows.
//!
//! Windows are half-open intervals `[start, stop)` advanced by a fixed increment.
//! The last window is clipped to the end of the signal rather than padded.
use super::{Event, Real};
use crate::error::ConfigurationError;
use std::ops::Range;
use tracing::debug;

/// The derived parameters of a sliding window scan over a signal of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSchedule {
    signal_len: usize,
    window_size: usize,
    window_increment: usize,
    n_windows: usize,
}

impl WindowSchedule {
    /// Validates the parameters and derives the schedule.
    /// # Parameters
    /// - signal_len: number of samples in the signal.
    /// - window_size: number of samples in each window.
    /// - window_overlap: fraction of the window size by which consecutive windows are advanced,
    ///   in `[0, 1)`. An overlap of zero tiles the signal with non-overlapping windows.
    pub fn new(
        signal_len: usize,
        window_size: usize,
        window_overlap: Real,
    ) -> Result<Self, ConfigurationError> {
        if signal_len == 0 {
            return Err(ConfigurationError::EmptySignal);
        }
        if window_size == 0 {
            return Err(ConfigurationError::ZeroWindowSize);
        }
        if window_size > signal_len {
            return Err(ConfigurationError::WindowExceedsSignal {
                window_size,
                signal_len,
            });
        }
        if !(0.0..1.0).contains(&window_overlap) {
            return Err(ConfigurationError::InvalidOverlap(window_overlap));
        }
        let window_increment = if window_overlap == 0.0 {
            window_size
        } else {
            ((window_size as Real * window_overlap).ceil() as usize).max(1)
        };
        let n_windows = (signal_len - window_size).div_ceil(window_increment) + 1;
        debug!(
            "Schedule of {n_windows} windows of {window_size} samples, advancing by {window_increment}"
        );
        Ok(Self {
            signal_len,
            window_size,
            window_increment,
            n_windows,
        })
    }

    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn window_increment(&self) -> usize {
        self.window_increment
    }

    pub fn n_windows(&self) -> usize {
        self.n_windows
    }

    /// Returns the sample range of the window with the given index, or [None] if out of range.
    pub fn window(&self, index: usize) -> Option<Range<usize>> {
        (index < self.n_windows).then(|| {
            let start = index * self.window_increment;
            start..(start + self.window_size).min(self.signal_len)
        })
    }

    /// Converts a run of windows into an event in sample units.
    /// # Parameters
    /// - first: index of the first window in the run.
    /// - end: index of the first window after the run, or the number of windows if the run
    ///   continues to the end of the signal.
    pub fn event_bounds(&self, first: usize, end: usize) -> Event {
        Event::new(
            first * self.window_increment,
            (end * self.window_increment + self.window_size).min(self.signal_len),
        )
    }
}
