//! Numeric constants for filter design.

/// Upper bound on the normalized cut-off (`cutoff_hz / sample_rate`) for a
/// physically meaningful design. At or above this (the Nyquist limit) the
/// windowed-sinc weights are still computed, but the response is degenerate.
pub const MAX_NORMALIZED_CUTOFF: f32 = 0.5;
