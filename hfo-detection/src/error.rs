//! Errors raised while configuring or running a detection.
//!
//! All errors are raised before any partial result is produced. Values which are mathematically
//! defined but numerically extreme (NaN, infinities) are not errors and propagate through the
//! arithmetic unchanged.
use crate::detection::Real;
use thiserror::Error;

/// An invalid parameter, or parameter combination, caught before computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("signal contains no samples")]
    EmptySignal,
    #[error("sampling frequency must be greater than zero, got {0}")]
    InvalidSampleRate(Real),
    #[error("window size must be greater than zero")]
    ZeroWindowSize,
    #[error("window size {window_size} exceeds signal length {signal_len}")]
    WindowExceedsSignal {
        window_size: usize,
        signal_len: usize,
    },
    #[error("window overlap must lie in [0, 1), got {0}")]
    InvalidOverlap(Real),
    #[error("threshold multiplier must be a positive finite number, got {0}")]
    InvalidThreshold(Real),
    #[error("smoothing window {smoothing_window} is too large for window size {window_size}")]
    SmoothingWindowTooLarge {
        smoothing_window: usize,
        window_size: usize,
    },
    #[error("signal has {actual} samples, at least {required} are required")]
    SignalTooShort { required: usize, actual: usize },
}

/// A statistic was requested of a sequence it is undefined for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("cannot compute statistics of an empty sequence")]
    EmptySequence,
}

/// Frequency parameters of the Stockwell transform which fall outside the valid bin range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericDomainError {
    #[error("minimum frequency bin {min_freq} must be below maximum frequency bin {max_freq}")]
    FrequencyRangeEmpty { min_freq: usize, max_freq: usize },
    #[error("maximum frequency bin {max_freq} exceeds the Nyquist bin {nyquist}")]
    FrequencyAboveNyquist { max_freq: usize, nyquist: usize },
    #[error("frequency step must be at least one bin")]
    ZeroFrequencyStep,
    #[error("gaussian width factor must be a positive finite number, got {0}")]
    InvalidWidthFactor(Real),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectionError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("degenerate statistics: {0}")]
    Statistics(#[from] StatisticsError),
    #[error("numeric domain: {0}")]
    NumericDomain(#[from] NumericDomainError),
    #[error("event ({start}, {stop}) cannot be represented as 32-bit sample indices")]
    EventOutOfRange { start: usize, stop: usize },
}
