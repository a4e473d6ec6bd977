//! Derives an adaptive decision threshold from the statistics of a feature sequence.
use super::Real;
use crate::error::StatisticsError;

/// Square root of the machine epsilon. Standard deviations at or below this fraction of the
/// mean's magnitude are rounding noise.
const RELATIVE_SPREAD_TOLERANCE: Real = 1.4901161193847656e-8;

/// A threshold of the form `mean + multiplier * std_dev`.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    /// Arithmetic mean of the feature sequence.
    pub mean: Real,
    /// Population standard deviation of the feature sequence.
    pub std_dev: Real,
    /// Number of standard deviations above the mean.
    pub multiplier: Real,
    /// The decision boundary itself.
    pub value: Real,
}

impl Threshold {
    /// Computes the threshold of the given values.
    /// # Parameters
    /// - values: the feature sequence, this must be non-empty.
    /// - multiplier: number of standard deviations above the mean to place the threshold.
    pub fn from_std(values: &[Real], multiplier: Real) -> Result<Self, StatisticsError> {
        if values.is_empty() {
            return Err(StatisticsError::EmptySequence);
        }
        let len = values.len() as Real;
        let mean = values.iter().sum::<Real>() / len;
        let variance = values
            .iter()
            .map(|v| {
                let delta = v - mean;
                delta * delta
            })
            .sum::<Real>()
            / len;
        let std_dev = variance.sqrt();
        Ok(Self {
            mean,
            std_dev,
            multiplier,
            value: mean + multiplier * std_dev,
        })
    }

    /// True if the values the threshold was computed from are equal up to rounding,
    /// in which case the threshold carries no information.
    pub fn is_degenerate(&self) -> bool {
        self.std_dev <= RELATIVE_SPREAD_TOLERANCE * self.mean.abs().max(Real::MIN_POSITIVE)
    }

    /// True if the value lies at or above the threshold.
    pub fn is_reached_by(&self, value: Real) -> bool {
        value >= self.value
    }
}

/// Returns `mean + multiplier * std_dev` of the values.
pub fn th_std(values: &[Real], multiplier: Real) -> Result<Real, StatisticsError> {
    Threshold::from_std(values, multiplier).map(|threshold| threshold.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn known_statistics() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let threshold = Threshold::from_std(&values, 1.5).unwrap();
        assert_approx_eq!(threshold.mean, 5.0);
        assert_approx_eq!(threshold.std_dev, 2.0);
        assert_approx_eq!(threshold.value, 8.0);
        assert!(threshold.is_reached_by(8.0));
        assert!(!threshold.is_reached_by(7.9));
        assert!(!threshold.is_degenerate());
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(th_std(&[], 3.0), Err(StatisticsError::EmptySequence));
    }

    #[test]
    fn constant_sequence_is_degenerate() {
        let threshold = Threshold::from_std(&[0.5; 10], 3.0).unwrap();
        assert!(threshold.is_degenerate());
        assert_approx_eq!(threshold.value, 0.5);
        assert!(threshold.is_reached_by(0.5));
    }

    #[test]
    fn rounding_noise_is_degenerate() {
        // Equal in exact arithmetic, but rounded differently.
        let values = [0.7, 0.7000000000000001, 0.7, 0.7, 0.6999999999999998, 0.7];
        let threshold = Threshold::from_std(&values, 2.0).unwrap();
        assert!(threshold.std_dev > 0.0);
        assert!(threshold.is_degenerate());

        let threshold = Threshold::from_std(&[1e-12, 1e-12, 1e-12, 1.1e-12], 2.0).unwrap();
        assert!(!threshold.is_degenerate());
        let threshold = Threshold::from_std(&[1e6, 1e6 + 1.0, 1e6], 2.0).unwrap();
        assert!(!threshold.is_degenerate());
    }

    #[test]
    fn nan_is_not_degenerate() {
        let threshold = Threshold::from_std(&[1.0, Real::NAN, 2.0], 2.0).unwrap();
        assert!(!threshold.is_degenerate());
    }

    #[test]
    fn threshold_is_monotonic_in_multiplier() {
        let values = [0.1, 0.4, 0.2, 3.0, 2.5, 0.3, 0.1, 0.2];
        let thresholds = (0..10)
            .map(|k| th_std(&values, k as Real * 0.5).unwrap())
            .collect::<Vec<_>>();
        assert!(thresholds.windows(2).all(|pair| pair[0] <= pair[1]));

        let reached = thresholds
            .iter()
            .map(|&th| values.iter().filter(|&&v| v >= th).count())
            .collect::<Vec<_>>();
        assert!(reached.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}
