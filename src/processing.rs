use crate::config::FilterConfig;
use crate::constants::MAX_NORMALIZED_CUTOFF;
use crate::error::Result;
use crate::signal_processing::{FilterType, WindowType, convolve, design_filter};
use crate::wav::AudioRecord;

/// Apply a windowed-sinc FIR filter to an audio record.
///
/// The requested filter length is promoted to the next odd value when even,
/// so the symmetric kernel has a single well-defined center tap. The output
/// is the full convolution: its sample count is
/// `input count + filter_size − 1`. Sample rate, channel count, and bit depth
/// are carried over unchanged; samples are 16-bit throughout, so the retained
/// metadata stays consistent with the output.
pub fn apply_filter(
    audio: &AudioRecord,
    cutoff_hz: u32,
    filter_length: usize,
    filter_type: FilterType,
    window: WindowType,
) -> Result<AudioRecord> {
    let filter_size = if filter_length.is_multiple_of(2) {
        filter_length + 1
    } else {
        filter_length
    };

    let ft = cutoff_hz as f32 / audio.sample_rate as f32;
    if ft >= MAX_NORMALIZED_CUTOFF {
        log::warn!(
            "cut-off {} Hz is at or above Nyquist for {} Hz input; \
             the design will be degenerate",
            cutoff_hz,
            audio.sample_rate
        );
    }

    let filter = design_filter(
        cutoff_hz,
        audio.sample_rate,
        filter_size,
        filter_type,
        window,
    )?;

    let samples = convolve(&audio.samples, &filter);

    Ok(AudioRecord {
        sample_rate: audio.sample_rate,
        channels: audio.channels,
        bits_per_sample: audio.bits_per_sample,
        samples,
    })
}

/// Convenience wrapper running `apply_filter` from a `FilterConfig`, using
/// the record's own sample rate as the sampling frequency.
pub fn apply_filter_with_config(audio: &AudioRecord, config: &FilterConfig) -> Result<AudioRecord> {
    apply_filter(
        audio,
        config.cutoff_hz,
        config.filter_length,
        config.filter_type,
        config.window,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(samples: Vec<i16>, sample_rate: u32) -> AudioRecord {
        AudioRecord {
            sample_rate,
            channels: 1,
            bits_per_sample: 16,
            samples,
        }
    }

    #[test]
    fn test_output_length_bookkeeping() {
        let audio = record(vec![0; 100], 44100);
        let out = apply_filter(&audio, 11025, 5, FilterType::Lowpass, WindowType::Rectangular)
            .unwrap();
        assert_eq!(out.sample_count(), 104);
    }

    #[test]
    fn test_even_length_promoted_to_odd() {
        let audio = record(vec![0; 50], 44100);
        // Requested 20 becomes 21, so the output grows by 20.
        let out = apply_filter(&audio, 5000, 20, FilterType::Lowpass, WindowType::Hamming)
            .unwrap();
        assert_eq!(out.sample_count(), 50 + 20);
    }

    #[test]
    fn test_odd_length_unchanged() {
        let audio = record(vec![0; 50], 44100);
        let out = apply_filter(&audio, 5000, 21, FilterType::Lowpass, WindowType::Hamming)
            .unwrap();
        assert_eq!(out.sample_count(), 50 + 20);
    }

    #[test]
    fn test_metadata_carried_over() {
        let audio = AudioRecord {
            sample_rate: 22050,
            channels: 2,
            bits_per_sample: 16,
            samples: vec![1, 2, 3, 4],
        };
        let out = apply_filter(&audio, 5000, 3, FilterType::Highpass, WindowType::Blackman)
            .unwrap();
        assert_eq!(out.sample_rate, 22050);
        assert_eq!(out.channels, 2);
        assert_eq!(out.bits_per_sample, 16);
    }

    #[test]
    fn test_input_record_is_not_mutated() {
        let audio = record(vec![100, 200, 300], 44100);
        let before = audio.samples.clone();
        let _ = apply_filter(&audio, 11025, 3, FilterType::Lowpass, WindowType::Rectangular)
            .unwrap();
        assert_eq!(audio.samples, before);
    }
}
