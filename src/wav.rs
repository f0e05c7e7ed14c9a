use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{FirError, Result};

/// A decoded WAV file: format metadata plus one interleaved sample sequence.
///
/// Channels are not de-interleaved; the filter treats the sample sequence as a
/// single stream, exactly as it appears in the data chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRecord {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub samples: Vec<i16>,
}

impl AudioRecord {
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

/// Read a 16-bit integer PCM WAV file.
///
/// The container scan (canonical header, skipping non-"data" chunks such as
/// "LIST") is delegated to `hound`. Only 16-bit integer samples are accepted;
/// other depths or float formats are reported as malformed input.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<AudioRecord> {
    let path = path.as_ref();
    let reader = WavReader::open(path).map_err(|e| match e {
        hound::Error::IoError(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
            FirError::FileNotFound(path.to_path_buf())
        }
        hound::Error::FormatError(msg) => FirError::MalformedHeader(msg.to_string()),
        other => FirError::Wav(other),
    })?;

    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(FirError::MalformedHeader(format!(
            "only 16-bit integer PCM is supported, got {}-bit {:?}",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let samples = reader
        .into_samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| match e {
            hound::Error::FormatError(msg) => FirError::MalformedHeader(msg.to_string()),
            other => FirError::Wav(other),
        })?;

    Ok(AudioRecord {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        samples,
    })
}

/// Write an audio record as a 16-bit integer PCM WAV file.
///
/// `hound` writes the data chunk and patches the RIFF and data-chunk length
/// fields on finalize, once the true sample count is known.
pub fn save_wav<P: AsRef<Path>>(path: P, audio: &AudioRecord) -> Result<()> {
    let spec = WavSpec {
        channels: audio.channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: audio.bits_per_sample,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in &audio.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(())
}
