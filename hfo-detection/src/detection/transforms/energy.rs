//! Energy measures: short-time energy {Dümpelmann et al. 2012}, RMS energy and Teager energy.
use super::{Real, moving_average_same};
use crate::error::ConfigurationError;
use itertools::Itertools;

/// Short-time energy: centered moving average of the squared samples.
/// # Parameters
/// - signal: the samples to transform.
/// - window_size: number of samples averaged at each point.
///
/// The output has the same length as `signal`.
pub fn compute_stenergy(
    signal: &[Real],
    window_size: usize,
) -> Result<Vec<Real>, ConfigurationError> {
    if window_size == 0 {
        return Err(ConfigurationError::ZeroWindowSize);
    }
    let squared = signal.iter().map(|v| v * v).collect::<Vec<_>>();
    Ok(moving_average_same(&squared, window_size))
}

/// Root mean square energy: square root of the short-time energy.
pub fn compute_rms(signal: &[Real], window_size: usize) -> Result<Vec<Real>, ConfigurationError> {
    Ok(compute_stenergy(signal, window_size)?
        .into_iter()
        .map(Real::sqrt)
        .collect())
}

/// Teager energy, `x[n]^2 - x[n-1] * x[n+1]`.
///
/// The first and last samples have no neighbour on one side, so they repeat the nearest computed
/// value. The signal must have at least three samples.
pub fn compute_teager_energy(signal: &[Real]) -> Result<Vec<Real>, ConfigurationError> {
    if signal.len() < 3 {
        return Err(ConfigurationError::SignalTooShort {
            required: 3,
            actual: signal.len(),
        });
    }
    let inner = signal
        .iter()
        .tuple_windows()
        .map(|(prev, x, next)| x * x - prev * next)
        .collect::<Vec<_>>();
    let first = inner.first().copied().unwrap_or_default();
    let last = inner.last().copied().unwrap_or_default();
    Ok(std::iter::once(first)
        .chain(inner)
        .chain(std::iter::once(last))
        .collect())
}
