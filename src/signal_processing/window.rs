use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use std::f32::consts::PI;

/// Window function applied to the ideal filter weights.
///
/// Anything that is not an exact match for one of the named windows selects
/// `Rectangular`, so parsing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// No tapering (coefficient 1 everywhere).
    #[default]
    Rectangular,
    /// `0.54 - 0.46*cos(2πn/m)`, ~53 dB sidelobe attenuation.
    Hamming,
    /// `0.5 - 0.5*cos(2πn/m)`, also known as the Hann window.
    Hanning,
    /// `0.42 - 0.5*cos(2πn/m) + 0.08*cos(4πn/m)`, best sidelobe suppression
    /// of the four at the cost of a wider mainlobe.
    Blackman,
}

impl FromStr for WindowType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim_start_matches('-') {
            "hamming" => WindowType::Hamming,
            "hanning" => WindowType::Hanning,
            "blackman" => WindowType::Blackman,
            _ => WindowType::Rectangular,
        })
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindowType::Rectangular => "rectangular",
            WindowType::Hamming => "hamming",
            WindowType::Hanning => "hanning",
            WindowType::Blackman => "blackman",
        };
        write!(f, "{}", name)
    }
}

/// Window coefficient for tap `n` of a filter of order `m` (= size − 1).
///
/// A single-tap filter (`m == 0`) has no meaningful taper; the coefficient is
/// defined as 1.0 rather than evaluating the cosine terms with a zero
/// denominator.
pub fn coefficient(window: WindowType, n: usize, m: usize) -> f32 {
    if m == 0 {
        return 1.0;
    }

    let x = 2.0 * PI * n as f32 / m as f32;
    match window {
        WindowType::Rectangular => 1.0,
        WindowType::Hamming => 0.54 - 0.46 * x.cos(),
        WindowType::Hanning => 0.5 - 0.5 * x.cos(),
        WindowType::Blackman => 0.42 - 0.5 * x.cos() + 0.08 * (2.0 * x).cos(),
    }
}
