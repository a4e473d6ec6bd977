//! Short time line length {Dümpelmann et al. 2012}.
use super::{Real, moving_average_valid};
use crate::error::ConfigurationError;
use itertools::Itertools;

/// Moving average of the absolute differences between consecutive samples.
/// # Parameters
/// - signal: the samples to transform.
/// - window_size: number of consecutive differences averaged into each output value.
///
/// Output `i` is the line length of the `window_size + 1` samples starting at `i`, so the output
/// has exactly `signal.len() - window_size` values (none if the signal is not longer than the window).
/// Callers mapping output indices back to sample positions must account for this.
pub fn compute_line_length(
    signal: &[Real],
    window_size: usize,
) -> Result<Vec<Real>, ConfigurationError> {
    if window_size == 0 {
        return Err(ConfigurationError::ZeroWindowSize);
    }
    let differences = signal
        .iter()
        .tuple_windows()
        .map(|(prev, next)| (next - prev).abs())
        .collect::<Vec<_>>();
    Ok(moving_average_valid(&differences, window_size))
}
