//! Hilbert envelope and power, computed from the analytic signal of the detrended input.
use super::Real;
use crate::error::ConfigurationError;
use num::Complex;
use rustfft::FftPlanner;

/// Removes the least-squares linear trend from the signal.
pub fn detrend(signal: &[Real]) -> Vec<Real> {
    let len = signal.len() as Real;
    let t_mean = (len - 1.0) / 2.0;
    let x_mean = signal.iter().sum::<Real>() / len;
    let mut covariance = 0.0;
    let mut t_variance = 0.0;
    for (t, x) in signal.iter().enumerate() {
        let dt = t as Real - t_mean;
        covariance += dt * (x - x_mean);
        t_variance += dt * dt;
    }
    let slope = if t_variance > 0.0 {
        covariance / t_variance
    } else {
        0.0
    };
    signal
        .iter()
        .enumerate()
        .map(|(t, x)| x - x_mean - slope * (t as Real - t_mean))
        .collect()
}

/// Computes the analytic signal `x + i H(x)` by suppressing the negative frequencies of the
/// spectrum and doubling the positive ones.
pub fn analytic_signal(signal: &[Real]) -> Vec<Complex<Real>> {
    let len = signal.len();
    if len == 0 {
        return Vec::new();
    }
    let mut planner = FftPlanner::<Real>::new();
    let fft_forward = planner.plan_fft_forward(len);
    let fft_inverse = planner.plan_fft_inverse(len);

    let mut buffer = signal
        .iter()
        .map(|&x| Complex::new(x, 0.0))
        .collect::<Vec<_>>();
    fft_forward.process(&mut buffer);

    // The DC bin, and the Nyquist bin of an even length, are kept as they are.
    let positive_end = len.div_ceil(2);
    let negative_start = len / 2 + 1;
    for bin in buffer.iter_mut().take(positive_end).skip(1) {
        *bin *= 2.0;
    }
    for bin in buffer.iter_mut().skip(negative_start) {
        *bin = Complex::new(0.0, 0.0);
    }

    fft_inverse.process(&mut buffer);
    let scale = (len as Real).recip();
    buffer.iter_mut().for_each(|c| *c *= scale);
    buffer
}

/// Magnitude of the analytic signal of the detrended input.
///
/// The output has the same length as the input and is never negative.
pub fn compute_hilbert_envelope(signal: &[Real]) -> Result<Vec<Real>, ConfigurationError> {
    if signal.is_empty() {
        return Err(ConfigurationError::EmptySignal);
    }
    Ok(analytic_signal(&detrend(signal))
        .into_iter()
        .map(|c| c.norm())
        .collect())
}

/// Square of the Hilbert envelope.
pub fn compute_hilbert_power(signal: &[Real]) -> Result<Vec<Real>, ConfigurationError> {
    if signal.is_empty() {
        return Err(ConfigurationError::EmptySignal);
    }
    Ok(analytic_signal(&detrend(signal))
        .into_iter()
        .map(|c| c.norm_sqr())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::TAU;

    // A cosine over whole periods is almost uncorrelated with a linear trend, so detrending
    // leaves it intact.
    fn cosine(len: usize, periods: Real, amplitude: Real) -> Vec<Real> {
        (0..len)
            .map(|n| amplitude * (TAU * periods * n as Real / len as Real).cos())
            .collect()
    }

    #[test]
    fn detrend_removes_line() {
        let signal = (0..20).map(|t| 3.0 + 0.5 * t as Real).collect::<Vec<_>>();
        detrend(&signal)
            .iter()
            .for_each(|&v| assert_approx_eq!(v, 0.0));
    }

    #[test]
    fn detrend_single_sample() {
        assert_eq!(detrend(&[4.0]), vec![0.0]);
    }

    #[test]
    fn analytic_signal_keeps_real_part() {
        for len in [15, 16] {
            let signal = cosine(len, 2.0, 1.5);
            let analytic = analytic_signal(&signal);
            assert_eq!(analytic.len(), len);
            for (x, z) in signal.iter().zip(&analytic) {
                assert_approx_eq!(z.re, *x);
            }
        }
    }

    #[test]
    fn envelope_of_cosine() {
        let signal = cosine(1000, 10.0, 3.0);
        let envelope = compute_hilbert_envelope(&signal).unwrap();
        assert_eq!(envelope.len(), signal.len());
        envelope[100..900]
            .iter()
            .for_each(|&v| assert_approx_eq!(v, 3.0, 0.05));

        let power = compute_hilbert_power(&signal).unwrap();
        assert_eq!(power.len(), signal.len());
        for (e, p) in envelope.iter().zip(&power) {
            assert!(*p >= 0.0);
            assert_approx_eq!(e * e, *p, 1e-9);
        }
    }

    #[test]
    fn envelope_of_odd_length_signal() {
        let signal = cosine(999, 9.0, 1.0);
        let envelope = compute_hilbert_envelope(&signal).unwrap();
        assert_eq!(envelope.len(), 999);
        assert!(envelope.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn empty_signal_is_rejected() {
        assert_eq!(
            compute_hilbert_envelope(&[]),
            Err(ConfigurationError::EmptySignal)
        );
        assert_eq!(
            compute_hilbert_power(&[]),
            Err(ConfigurationError::EmptySignal)
        );
    }
}
