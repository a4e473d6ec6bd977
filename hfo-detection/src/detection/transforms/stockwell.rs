//! Stockwell transform {Stockwell et al. 1996, "Localization of the complex spectrum: the S transform"}.
//!
//! Each requested frequency bin is obtained by masking a frequency-shifted copy of the signal's
//! spectrum with a Gaussian centred on that bin, then inverse transforming. The result is a
//! complex "local spectrum" at every time sample.
use super::Real;
use crate::error::{ConfigurationError, DetectionError, NumericDomainError};
use ndarray::Array2;
use num::Complex;
use rustfft::{Fft, FftPlanner};
use std::f64::consts::PI;

/// Frequency range and resolution of a Stockwell transform. Frequencies are FFT bin indices,
/// bin `k` of an `N` sample signal corresponding to `k * fs / N` Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockwellParameters {
    /// Lowest frequency bin.
    pub min_freq: usize,
    /// Highest frequency bin, at most the Nyquist bin `N / 2`.
    pub max_freq: usize,
    /// Step between consecutive frequency bins.
    pub f_fs: usize,
    /// Width factor of the Gaussian window.
    pub factor: Real,
}

impl Default for StockwellParameters {
    fn default() -> Self {
        Self {
            min_freq: 0,
            max_freq: 1,
            f_fs: 1,
            factor: 1.0,
        }
    }
}

impl StockwellParameters {
    /// Returns an iterator over the frequency bins of the transform's rows.
    pub fn bins(&self) -> impl Iterator<Item = usize> + use<> {
        (self.min_freq..=self.max_freq).step_by(self.f_fs.max(1))
    }

    fn validate(&self, signal_len: usize) -> Result<(), NumericDomainError> {
        if self.f_fs == 0 {
            return Err(NumericDomainError::ZeroFrequencyStep);
        }
        if self.min_freq >= self.max_freq {
            return Err(NumericDomainError::FrequencyRangeEmpty {
                min_freq: self.min_freq,
                max_freq: self.max_freq,
            });
        }
        let nyquist = signal_len / 2;
        if self.max_freq > nyquist {
            return Err(NumericDomainError::FrequencyAboveNyquist {
                max_freq: self.max_freq,
                nyquist,
            });
        }
        if !(self.factor > 0.0 && self.factor.is_finite()) {
            return Err(NumericDomainError::InvalidWidthFactor(self.factor));
        }
        Ok(())
    }
}

/// The output of [compute_stockwell_transform].
#[derive(Debug, Clone)]
pub struct StockwellTransform {
    /// Rows are frequencies, columns are times.
    pub matrix: Array2<Complex<Real>>,
    /// Time of each column in seconds.
    pub time: Vec<Real>,
    /// Frequency of each row in Hz.
    pub frequency: Vec<Real>,
}

impl StockwellTransform {
    pub fn magnitude(&self) -> Array2<Real> {
        self.matrix.mapv(|c| c.norm())
    }

    /// Returns the row with the greatest magnitude in the given column.
    pub fn peak_row(&self, column: usize) -> Option<usize> {
        (column < self.matrix.ncols())
            .then(|| {
                self.matrix
                    .column(column)
                    .iter()
                    .map(|c| c.norm())
                    .enumerate()
                    .max_by(|(_, a), (_, b)| a.total_cmp(b))
                    .map(|(row, _)| row)
            })
            .flatten()
    }
}

/// Periodic Gaussian window for circular convolution in the frequency domain.
/// # Parameters
/// - length: number of points in the window.
/// - freq: frequency bin the window is built for, the width is inversely proportional to it.
/// - factor: width factor.
///
/// Point `k` is `exp(-2 factor pi^2 k^2 / freq^2) + exp(-2 factor pi^2 (k - length)^2 / freq^2)`.
pub fn gaussian_window(length: usize, freq: Real, factor: Real) -> Vec<Real> {
    let scale = -factor * 2.0 * PI * PI / (freq * freq);
    (0..length)
        .map(|k| {
            let forward = k as Real;
            let wrapped = forward - length as Real;
            (scale * forward * forward).exp() + (scale * wrapped * wrapped).exp()
        })
        .collect()
}

/// Inverse transforms the spectrum, shifted down by `bin` and masked by the bin's Gaussian window.
fn localised_row(
    spectrum: &[Complex<Real>],
    bin: usize,
    factor: Real,
    fft_inverse: &dyn Fft<Real>,
) -> Vec<Complex<Real>> {
    let len = spectrum.len();
    let window = gaussian_window(len, bin as Real, factor);
    let mut buffer = window
        .iter()
        .enumerate()
        .map(|(k, &g)| spectrum[(k + bin) % len] * g)
        .collect::<Vec<_>>();
    fft_inverse.process(&mut buffer);
    let scale = (len as Real).recip();
    buffer.iter_mut().for_each(|c| *c *= scale);
    buffer
}

/// Computes the Stockwell transform of the signal.
/// # Parameters
/// - signal: the samples to transform.
/// - fs: sampling frequency of the signal.
/// - parameters: frequency range, resolution and window width.
///
/// The matrix has `ceil((max_freq - min_freq + 1) / f_fs)` rows and one column per sample.
/// A zero frequency row holds the signal's mean, as a DC component has no localised oscillation.
#[tracing::instrument(skip_all, level = "trace", fields(signal_len = signal.len()))]
pub fn compute_stockwell_transform(
    signal: &[Real],
    fs: Real,
    parameters: &StockwellParameters,
) -> Result<StockwellTransform, DetectionError> {
    if signal.is_empty() {
        return Err(ConfigurationError::EmptySignal.into());
    }
    if fs <= 0.0 || fs.is_nan() {
        return Err(ConfigurationError::InvalidSampleRate(fs).into());
    }
    parameters.validate(signal.len())?;

    let len = signal.len();
    let mut planner = FftPlanner::<Real>::new();
    let fft_forward = planner.plan_fft_forward(len);
    let fft_inverse = planner.plan_fft_inverse(len);

    let mut spectrum = signal
        .iter()
        .map(|&x| Complex::new(x, 0.0))
        .collect::<Vec<_>>();
    fft_forward.process(&mut spectrum);
    let mean = signal.iter().sum::<Real>() / len as Real;

    let rows = (parameters.max_freq - parameters.min_freq + 1).div_ceil(parameters.f_fs);
    let mut matrix = Array2::from_elem((rows, len), Complex::new(0.0, 0.0));
    for (mut row, bin) in matrix.rows_mut().into_iter().zip(parameters.bins()) {
        if bin == 0 {
            row.fill(Complex::new(mean, 0.0));
        } else {
            let values = localised_row(&spectrum, bin, parameters.factor, fft_inverse.as_ref());
            row.iter_mut().zip(values).for_each(|(dst, src)| *dst = src);
        }
    }

    Ok(StockwellTransform {
        matrix,
        time: (0..len).map(|n| n as Real / fs).collect(),
        frequency: parameters
            .bins()
            .map(|bin| bin as Real * fs / len as Real)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::TAU;

    fn cosine(len: usize, bin: usize) -> Vec<Real> {
        (0..len)
            .map(|n| (TAU * bin as Real * n as Real / len as Real).cos())
            .collect()
    }

    #[test]
    fn gaussian_window_is_periodic() {
        let window = gaussian_window(16, 4.0, 1.0);
        assert_eq!(window.len(), 16);
        assert_approx_eq!(window[0], 1.0, 1e-9);
        for k in 1..16 {
            assert_approx_eq!(window[k], window[16 - k], 1e-12);
            assert!(window[k] <= window[0]);
        }
        assert!(window[1] > window[2]);
    }

    #[test]
    fn gaussian_window_narrows_with_factor() {
        let wide = gaussian_window(32, 8.0, 0.5);
        let narrow = gaussian_window(32, 8.0, 2.0);
        assert!(narrow[2] < wide[2]);
    }

    #[test]
    fn shape_and_axes() {
        let signal = cosine(128, 10);
        let parameters = StockwellParameters {
            min_freq: 5,
            max_freq: 20,
            f_fs: 3,
            factor: 1.0,
        };
        let st = compute_stockwell_transform(&signal, 256.0, &parameters).unwrap();
        assert_eq!(st.matrix.dim(), (6, 128));
        assert_eq!(st.time.len(), 128);
        assert_approx_eq!(st.time[2], 2.0 / 256.0);
        assert_eq!(st.frequency.len(), 6);
        assert_approx_eq!(st.frequency[0], 10.0);
        assert_approx_eq!(st.frequency[5], 40.0);
    }

    #[test]
    fn sinusoid_peaks_at_its_own_bin() {
        let signal = cosine(256, 20);
        let parameters = StockwellParameters {
            min_freq: 10,
            max_freq: 30,
            f_fs: 1,
            factor: 1.0,
        };
        let st = compute_stockwell_transform(&signal, 256.0, &parameters).unwrap();
        assert_eq!(st.matrix.nrows(), 21);
        for column in 0..256 {
            assert_eq!(st.peak_row(column), Some(10));
        }
        let magnitude = st.magnitude();
        assert_approx_eq!(magnitude[[10, 0]], 0.5, 1e-6);
        assert_eq!(st.peak_row(256), None);
    }

    #[test]
    fn zero_frequency_row_is_mean() {
        let signal = cosine(64, 4)
            .into_iter()
            .map(|x| x + 2.0)
            .collect::<Vec<_>>();
        let parameters = StockwellParameters {
            min_freq: 0,
            max_freq: 8,
            ..Default::default()
        };
        let st = compute_stockwell_transform(&signal, 64.0, &parameters).unwrap();
        st.matrix.row(0).iter().for_each(|c| {
            assert_approx_eq!(c.re, 2.0);
            assert_approx_eq!(c.im, 0.0);
        });
    }

    #[test]
    fn invalid_parameters() {
        let signal = cosine(64, 4);
        let check = |parameters: StockwellParameters, expected: NumericDomainError| {
            assert_eq!(
                compute_stockwell_transform(&signal, 64.0, &parameters).unwrap_err(),
                DetectionError::NumericDomain(expected)
            );
        };
        check(
            StockwellParameters {
                min_freq: 8,
                max_freq: 8,
                ..Default::default()
            },
            NumericDomainError::FrequencyRangeEmpty {
                min_freq: 8,
                max_freq: 8,
            },
        );
        check(
            StockwellParameters {
                min_freq: 1,
                max_freq: 33,
                ..Default::default()
            },
            NumericDomainError::FrequencyAboveNyquist {
                max_freq: 33,
                nyquist: 32,
            },
        );
        check(
            StockwellParameters {
                f_fs: 0,
                ..Default::default()
            },
            NumericDomainError::ZeroFrequencyStep,
        );
        check(
            StockwellParameters {
                factor: 0.0,
                ..Default::default()
            },
            NumericDomainError::InvalidWidthFactor(0.0),
        );

        assert_eq!(
            compute_stockwell_transform(&[], 64.0, &StockwellParameters::default())
                .unwrap_err(),
            DetectionError::Configuration(ConfigurationError::EmptySignal)
        );
        assert_eq!(
            compute_stockwell_transform(&signal, 0.0, &StockwellParameters::default())
                .unwrap_err(),
            DetectionError::Configuration(ConfigurationError::InvalidSampleRate(0.0))
        );
        assert!(matches!(
            compute_stockwell_transform(&signal, Real::NAN, &StockwellParameters::default()),
            Err(DetectionError::Configuration(
                ConfigurationError::InvalidSampleRate(_)
            ))
        ));
    }
}
