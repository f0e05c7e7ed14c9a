//! Configuration for a single filtering run.

use std::path::PathBuf;

use crate::error::{FirError, Result};
use crate::signal_processing::{FilterType, WindowType};

/// Everything one batch run needs: where to read, how to filter, where to
/// write.
///
/// `Default` carries the historical fallback values used when the CLI is
/// invoked with no arguments: `wavfiles/Test0.wav`, lowpass at 22 kHz,
/// length 21, rectangular window, written to `output.wav`.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Input WAV file path.
    pub input: PathBuf,
    /// Lowpass or highpass.
    pub filter_type: FilterType,
    /// Cut-off frequency in Hz. Must be below half the input's sample rate
    /// for a meaningful design; see `processing::apply_filter`.
    pub cutoff_hz: u32,
    /// Requested filter length. Even values are promoted to the next odd
    /// length so the kernel has a single center tap.
    pub filter_length: usize,
    /// Window applied to the ideal filter weights.
    pub window: WindowType,
    /// Output WAV file path.
    pub output: PathBuf,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("wavfiles/Test0.wav"),
            filter_type: FilterType::Lowpass,
            cutoff_hz: 22000,
            filter_length: 21,
            window: WindowType::Rectangular,
            output: PathBuf::from("output.wav"),
        }
    }
}

impl FilterConfig {
    /// Reject values that cannot produce any filter at all.
    pub fn validate(&self) -> Result<()> {
        if self.cutoff_hz == 0 {
            return Err(FirError::InvalidArgument(
                "cut-off frequency must be non-zero".into(),
            ));
        }
        if self.filter_length == 0 {
            return Err(FirError::InvalidArgument(
                "filter length must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
