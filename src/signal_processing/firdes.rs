//! Windowed-sinc FIR filter design.
//!
//! Weights are computed in single precision: the ideal (infinite) lowpass or
//! highpass impulse response is evaluated at each tap and tapered by a window
//! coefficient. No gain normalization is applied; the passband gain is
//! whatever the raw windowed-sinc values sum to.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use std::f32::consts::PI;

use crate::error::{FirError, Result};
use crate::signal_processing::window::{self, WindowType};

/// Filter response type.
///
/// Anything that is not an exact match for `highpass` selects `Lowpass`, so
/// parsing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    #[default]
    Lowpass,
    Highpass,
}

impl FromStr for FilterType {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim_start_matches('-') {
            "highpass" => FilterType::Highpass,
            _ => FilterType::Lowpass,
        })
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterType::Lowpass => write!(f, "lowpass"),
            FilterType::Highpass => write!(f, "highpass"),
        }
    }
}

/// The `n`-th weight of the ideal lowpass filter of order `m` with normalized
/// cut-off `ft` (cycles/sample). The center tap is `2·ft`; elsewhere the
/// shifted sinc `sin(2π·ft·(n − m/2)) / (π·(n − m/2))`.
fn lowpass_weight(m: f32, n: usize, ft: f32) -> f32 {
    if n == (m / 2.0) as usize {
        return 2.0 * ft;
    }
    let x = n as f32 - m / 2.0;
    (2.0 * PI * ft * x).sin() / (PI * x)
}

/// The `n`-th weight of the ideal highpass filter: spectral inversion of the
/// lowpass, with center tap `1 − 2·ft`.
///
/// The center test compares against the real-valued midpoint `m/2`, unlike
/// the lowpass which floors it. For an odd filter size (even order) the two
/// agree; an even size has no integer midpoint, and every highpass tap then
/// takes the sinc branch.
fn highpass_weight(m: f32, n: usize, ft: f32) -> f32 {
    if n as f32 == m / 2.0 {
        return 1.0 - 2.0 * ft;
    }
    let x = n as f32 - m / 2.0;
    -(2.0 * PI * ft * x).sin() / (PI * x)
}

/// Design a windowed-sinc FIR filter.
///
/// `filter_size` taps are produced for a filter of order `filter_size − 1`.
/// Callers wanting a single well-defined center tap must pass an odd size
/// (the orchestrator in `processing` enforces this).
///
/// The cut-off should satisfy `cutoff_hz < sample_rate / 2`; this is a
/// contract, not a checked invariant, and degenerate designs are produced
/// silently for violations.
///
/// # Errors
/// Returns `FirError::FilterDesign` if `filter_size` is zero or
/// `sample_rate` is zero.
pub fn design_filter(
    cutoff_hz: u32,
    sample_rate: u32,
    filter_size: usize,
    filter_type: FilterType,
    window: WindowType,
) -> Result<Vec<f32>> {
    if filter_size == 0 {
        return Err(FirError::FilterDesign("filter size must be non-zero".into()));
    }
    if sample_rate == 0 {
        return Err(FirError::FilterDesign("sample rate must be non-zero".into()));
    }

    let m = (filter_size - 1) as f32;
    let ft = cutoff_hz as f32 / sample_rate as f32;

    let weights = (0..filter_size)
        .map(|n| {
            let ideal = match filter_type {
                FilterType::Lowpass => lowpass_weight(m, n, ft),
                FilterType::Highpass => highpass_weight(m, n, ft),
            };
            ideal * window::coefficient(window, n, filter_size - 1)
        })
        .collect();

    log::debug!(
        "designed {} {} filter: {} taps, ft = {:.4}",
        window,
        filter_type,
        filter_size,
        ft
    );

    Ok(weights)
}
