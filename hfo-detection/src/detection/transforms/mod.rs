//! Stateless transforms mapping a raw sample sequence to a derived feature sequence.
//!
//! All transforms are pure: the input is never modified, and NaN or infinite samples propagate
//! through the arithmetic rather than being reported as errors.
pub mod energy;
pub mod hilbert;
pub mod line_length;
pub mod stockwell;

use super::Real;

pub use energy::{compute_rms, compute_stenergy, compute_teager_energy};
pub use hilbert::{analytic_signal, compute_hilbert_envelope, compute_hilbert_power, detrend};
pub use line_length::compute_line_length;
pub use stockwell::{
    StockwellParameters, StockwellTransform, compute_stockwell_transform, gaussian_window,
};

/// Centered moving average with boundary truncation, output has the same length as the input.
///
/// Output `i` averages the input over `[i + (w - 1) / 2 - (w - 1), i + (w - 1) / 2]`, where indices
/// outside the input contribute nothing but the divisor stays `w`.
fn moving_average_same(values: &[Real], window_size: usize) -> Vec<Real> {
    let offset = (window_size - 1) / 2;
    (0..values.len())
        .map(|i| {
            let last = (i + offset).min(values.len() - 1);
            let first = (i + offset + 1).saturating_sub(window_size);
            values[first..=last].iter().sum::<Real>() / window_size as Real
        })
        .collect()
}

/// Moving average over every complete run of `window_size` consecutive values.
///
/// The output has `len - window_size + 1` values, or none if the input is shorter than the window.
fn moving_average_valid(values: &[Real], window_size: usize) -> Vec<Real> {
    values
        .windows(window_size)
        .map(|window| window.iter().sum::<Real>() / window_size as Real)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn same_average_matches_centered_convolution() {
        let averaged = moving_average_same(&[1.0, 1.0, 1.0, 1.0, 1.0], 2);
        assert_eq!(averaged.len(), 5);
        assert_approx_eq!(averaged[0], 0.5);
        averaged[1..]
            .iter()
            .for_each(|&v| assert_approx_eq!(v, 1.0));

        let averaged = moving_average_same(&[3.0, 0.0, 0.0, 0.0, 3.0], 3);
        assert_approx_eq!(averaged[0], 1.0);
        assert_approx_eq!(averaged[1], 1.0);
        assert_approx_eq!(averaged[2], 0.0);
        assert_approx_eq!(averaged[3], 1.0);
        assert_approx_eq!(averaged[4], 1.0);
    }

    #[test]
    fn same_average_window_longer_than_input() {
        let averaged = moving_average_same(&[2.0, 2.0], 4);
        assert_eq!(averaged.len(), 2);
        averaged.iter().for_each(|&v| assert_approx_eq!(v, 1.0));
    }

    #[test]
    fn valid_average() {
        let averaged = moving_average_valid(&[1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(averaged, vec![1.5, 2.5, 3.5]);
        assert!(moving_average_valid(&[1.0], 2).is_empty());
    }
}
