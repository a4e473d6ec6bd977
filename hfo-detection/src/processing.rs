//! Provides functions which extract lists of events from a signal using the specified detector and settings.
use crate::{
    detection::{EventList, Real, Signal, detect_hfo_ll},
    error::DetectionError,
    parameters::{DetectorSettings, LineLengthParameters, Mode},
};

/// Extract events from the given samples, using the given detector settings.
/// # Parameters
/// - samples: raw signal data.
/// - detector_settings: settings to use for the detector.
#[tracing::instrument(skip_all, fields(signal_len = samples.len(), num_events))]
pub fn find_events(
    samples: &[Real],
    detector_settings: &DetectorSettings,
) -> Result<EventList, DetectionError> {
    let signal = Signal::new(samples, detector_settings.fs)?;
    let events = match detector_settings.mode {
        Mode::LineLength(parameters) => detect_hfo_ll(&signal, parameters)?,
    };
    tracing::Span::current().record("num_events", events.len());
    Ok(events)
}

/// Extract events from the given samples using the line length detector.
/// # Parameters
/// - samples: raw signal data, already filtered if required.
/// - fs: sampling frequency.
/// - threshold: number of standard deviations to use as a threshold.
/// - window_size: sliding window size in samples.
/// - window_overlap: fraction of the window size by which the window advances, in `[0, 1)`.
pub fn detect(
    samples: &[Real],
    fs: Real,
    threshold: Real,
    window_size: usize,
    window_overlap: Real,
) -> Result<EventList, DetectionError> {
    let mode = Mode::LineLength(LineLengthParameters {
        threshold,
        window_size,
        window_overlap,
        ..Default::default()
    });
    find_events(samples, &DetectorSettings { fs, mode: &mode })
}
