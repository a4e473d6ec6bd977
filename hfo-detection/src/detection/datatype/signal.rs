//! A single channel of samples, together with the frequency it was sampled at.
use super::Real;
use crate::error::ConfigurationError;

/// An immutable view of a finite, single-channel signal.
///
/// Samples are implicitly indexed `0..len()`. A [Signal] can only be constructed from a non-empty
/// slice and a positive sampling frequency, so the detectors never need to check either again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal<'a> {
    samples: &'a [Real],
    fs: Real,
}

impl<'a> Signal<'a> {
    /// Creates a new signal view.
    /// # Parameters
    /// - samples: the raw samples, already filtered if required.
    /// - fs: the sampling frequency in samples per second.
    pub fn new(samples: &'a [Real], fs: Real) -> Result<Self, ConfigurationError> {
        if samples.is_empty() {
            return Err(ConfigurationError::EmptySignal);
        }
        if fs <= 0.0 || fs.is_nan() {
            return Err(ConfigurationError::InvalidSampleRate(fs));
        }
        Ok(Self { samples, fs })
    }

    pub fn samples(&self) -> &'a [Real] {
        self.samples
    }

    pub fn fs(&self) -> Real {
        self.fs
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`, empty signals are rejected by [Signal::new].
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_seconds(&self) -> Real {
        self.samples.len() as Real / self.fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn empty_signal_is_rejected() {
        assert_eq!(
            Signal::new(&[], 5000.0),
            Err(ConfigurationError::EmptySignal)
        );
    }

    #[test]
    fn non_positive_sample_rate_is_rejected() {
        let samples = [0.0; 4];
        assert_eq!(
            Signal::new(&samples, 0.0),
            Err(ConfigurationError::InvalidSampleRate(0.0))
        );
        assert_eq!(
            Signal::new(&samples, -1.0),
            Err(ConfigurationError::InvalidSampleRate(-1.0))
        );
        assert!(Signal::new(&samples, Real::NAN).is_err());
    }

    #[test]
    fn duration() {
        let samples = [0.0; 2500];
        let signal = Signal::new(&samples, 5000.0).unwrap();
        assert_eq!(signal.len(), 2500);
        assert!(!signal.is_empty());
        assert_approx_eq!(signal.duration_seconds(), 0.5);
    }
}
