//! Same-length linear convolution with implicit zero padding.
//!
//! The output is the middle slice of the full linear convolution:
//! `out[i] = full[i + (M - 1) / 2]` for a kernel of length M, the numpy/scipy
//! "same" centering (left-biased for even M). Samples beyond the signal
//! boundaries contribute zero, so the first and last `M / 2` outputs are
//! attenuated weighted averages over whatever kernel support overlaps the
//! signal. Kernels longer than the signal are valid; the output length is
//! always the signal length.

use crate::math::fft::FftHelper;
use num_complex::Complex64;

/// Direct-loop cost bound (signal length times kernel length) above which
/// the FFT path takes over.
const DIRECT_COST_LIMIT: usize = 1 << 16;

/// Convolve `signal` with `kernel`, picking the direct or FFT implementation
/// by cost.
pub fn convolve_same(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    if signal.len().saturating_mul(kernel.len()) <= DIRECT_COST_LIMIT {
        convolve_same_direct(signal, kernel)
    } else {
        convolve_same_fft(signal, kernel)
    }
}

/// Reference FIR implementation: explicit accumulation per output sample.
pub fn convolve_same_direct(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let m = kernel.len();
    if n == 0 || m == 0 {
        return vec![0.0; n];
    }

    let offset = (m - 1) / 2;
    let mut output = vec![0.0; n];
    for (i, slot) in output.iter_mut().enumerate() {
        // Index into the full convolution; clamp the kernel range so the
        // signal index t - k stays inside [0, n).
        let t = i + offset;
        let k_lo = t.saturating_sub(n - 1);
        let k_hi = t.min(m - 1);
        let mut acc = 0.0;
        for k in k_lo..=k_hi {
            acc += kernel[k] * signal[t - k];
        }
        *slot = acc;
    }
    output
}

/// FFT-accelerated implementation; agrees with the direct loop to within
/// floating-point round-off.
pub fn convolve_same_fft(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let m = kernel.len();
    if n == 0 || m == 0 {
        return vec![0.0; n];
    }

    let padded = (n + m - 1).next_power_of_two();
    let helper = FftHelper::new(padded);
    let signal_spectrum = helper.forward(signal);
    let kernel_spectrum = helper.forward(kernel);
    let product: Vec<Complex64> = signal_spectrum
        .iter()
        .zip(&kernel_spectrum)
        .map(|(a, b)| a * b)
        .collect();
    let full = helper.inverse(product);

    let offset = (m - 1) / 2;
    full[offset..offset + n].to_vec()
}
