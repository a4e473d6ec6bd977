//! Line-length detection algorithm {Gardner et al. 2007, Worrell et al. 2018, Akiyama et al. 2011}.
//!
//! The signal is split into overlapping windows, each window is scored with a feature transform
//! (line length by default), and runs of windows whose score reaches `mean + k * std` of all the
//! scores are reported as events.
use super::{
    EventFilter, EventList, Real, SegmentIterable, Signal, Threshold, ThresholdCrossingDetector,
    WindowSchedule,
    transforms::{
        compute_hilbert_envelope, compute_hilbert_power, compute_line_length, compute_rms,
        compute_stenergy, compute_teager_energy,
    },
};
use crate::{
    error::{ConfigurationError, DetectionError},
    parameters::{DEFAULT_ENERGY_SMOOTHING, Feature, LineLengthParameters},
};
use tracing::{debug, instrument};

fn mean(values: &[Real]) -> Real {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<Real>() / values.len() as Real
    }
}

/// Scores a single window with the given feature transform.
/// # Parameters
/// - feature: the transform to apply.
/// - window: the samples of the window, possibly clipped at the end of the signal.
/// - smoothing_window: the transform's smoothing window, see [LineLengthParameters::smoothing_window].
///
/// Line length is the first value of [compute_line_length], with the smoothing window clamped to
/// the window so that it collapses to a single representative value. Windows too short to
/// transform score zero.
pub fn window_feature(
    feature: Feature,
    window: &[Real],
    smoothing_window: Option<usize>,
) -> Result<Real, ConfigurationError> {
    let energy_smoothing = || {
        smoothing_window
            .unwrap_or(DEFAULT_ENERGY_SMOOTHING)
            .min(window.len())
    };
    match feature {
        Feature::LineLength => {
            let span = window.len().saturating_sub(1);
            let span = smoothing_window.map_or(span, |smoothing| smoothing.min(span));
            if span == 0 {
                return Ok(0.0);
            }
            Ok(compute_line_length(window, span)?
                .first()
                .copied()
                .unwrap_or_default())
        }
        Feature::ShortTimeEnergy => Ok(mean(&compute_stenergy(window, energy_smoothing())?)),
        Feature::Rms => Ok(mean(&compute_rms(window, energy_smoothing())?)),
        Feature::Teager => {
            if window.len() < 3 {
                return Ok(0.0);
            }
            Ok(mean(&compute_teager_energy(window)?))
        }
        Feature::HilbertEnvelope => Ok(mean(&compute_hilbert_envelope(window)?)),
        Feature::HilbertPower => Ok(mean(&compute_hilbert_power(window)?)),
    }
}

/// Scores every window of the schedule, the result has one value per window.
pub fn feature_series(
    samples: &[Real],
    schedule: WindowSchedule,
    parameters: &LineLengthParameters,
) -> Result<Vec<Real>, ConfigurationError> {
    samples
        .segments(schedule)
        .map(|(_, window)| window_feature(parameters.feature, window, parameters.smoothing_window))
        .collect()
}

/// Extracts events from the signal using the line length detector.
/// # Parameters
/// - signal: raw data, already filtered if required.
/// - parameters: settings to use for the detector.
///
/// All parameters are validated before any window is scored. A feature sequence with zero
/// variance carries no information and yields no events.
#[instrument(skip_all, level = "debug", fields(signal_len = signal.len(), feature = %parameters.feature))]
pub fn detect_hfo_ll(
    signal: &Signal,
    parameters: &LineLengthParameters,
) -> Result<EventList, DetectionError> {
    let schedule = parameters.validate(signal.len())?;
    let features = feature_series(signal.samples(), schedule, parameters)?;

    let threshold = Threshold::from_std(&features, parameters.threshold)?;
    debug!(
        "Threshold {} (mean {}, std {}) over {} windows",
        threshold.value,
        threshold.mean,
        threshold.std_dev,
        features.len()
    );
    if threshold.is_degenerate() {
        debug!("Feature sequence has zero variance, no events detected");
        return Ok(EventList::new());
    }

    Ok(features
        .into_iter()
        .enumerate()
        .events(ThresholdCrossingDetector::new(threshold.value, schedule))
        .collect())
}
