//! Defines the parameters used by the detectors defined in this crate.
use crate::{
    detection::{Real, WindowSchedule},
    error::ConfigurationError,
};
use clap::{Parser, Subcommand, ValueEnum};
use strum::{Display, EnumIter};

/// Default number of samples averaged by the energy transforms when scoring a window.
pub const DEFAULT_ENERGY_SMOOTHING: usize = 6;

#[derive(Debug)]
pub struct DetectorSettings<'a> {
    /// Sampling frequency of the signal, in samples per second.
    pub fs: Real,
    /// The detector to use.
    pub mode: &'a Mode,
}

/// The transform used to score each window of the signal.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Feature {
    /// Mean absolute difference between consecutive samples.
    #[default]
    LineLength,
    /// Mean of the short-time energy.
    ShortTimeEnergy,
    /// Mean of the root mean square energy.
    Rms,
    /// Mean of the Teager energy.
    Teager,
    /// Mean of the Hilbert envelope.
    HilbertEnvelope,
    /// Mean of the Hilbert power.
    HilbertPower,
}

/// Encapsulates the parameters specific to the line length detector.
#[derive(Debug, Clone, PartialEq, Parser)]
pub struct LineLengthParameters {
    /// Number of standard deviations above the mean a window's feature must reach to register.
    #[clap(long, default_value = "3")]
    pub threshold: Real,

    /// Size of the sliding window, in samples.
    #[clap(long, default_value = "100")]
    pub window_size: usize,

    /// Fraction of the window size by which consecutive windows advance, in [0, 1).
    /// Zero tiles the signal with non-overlapping windows.
    #[clap(long, default_value = "0.25")]
    pub window_overlap: Real,

    /// Size of the smoothing window used by the feature transform, in samples.
    /// If unset, line length spans the whole window and the energy transforms average six samples.
    #[clap(long)]
    pub smoothing_window: Option<usize>,

    /// The transform used to score each window.
    #[clap(long, value_enum, default_value_t = Feature::LineLength)]
    pub feature: Feature,
}

impl Default for LineLengthParameters {
    fn default() -> Self {
        Self {
            threshold: 3.0,
            window_size: 100,
            window_overlap: 0.25,
            smoothing_window: None,
            feature: Feature::LineLength,
        }
    }
}

impl LineLengthParameters {
    /// Checks the parameters against a signal of the given length and derives the window schedule.
    pub fn validate(&self, signal_len: usize) -> Result<WindowSchedule, ConfigurationError> {
        if !(self.threshold > 0.0 && self.threshold.is_finite()) {
            return Err(ConfigurationError::InvalidThreshold(self.threshold));
        }
        let schedule = WindowSchedule::new(signal_len, self.window_size, self.window_overlap)?;
        if let Some(smoothing_window) = self.smoothing_window {
            if smoothing_window == 0 {
                return Err(ConfigurationError::ZeroWindowSize);
            }
            // Line length needs one more sample than its smoothing window to produce a value.
            let too_large = match self.feature {
                Feature::LineLength => smoothing_window >= self.window_size,
                _ => smoothing_window > self.window_size,
            };
            if too_large {
                return Err(ConfigurationError::SmoothingWindowTooLarge {
                    smoothing_window,
                    window_size: self.window_size,
                });
            }
        }
        Ok(schedule)
    }
}

/// Specifies which detector is to be used, and wraps the detector-specific options in each variant.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Mode {
    /// Detects events using the line length detector {Gardner et al. 2007, Worrell et al. 2018, Akiyama et al. 2011}.
    LineLength(LineLengthParameters),
}
