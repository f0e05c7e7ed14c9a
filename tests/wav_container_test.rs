//! Container-level behavior: chunk scanning and format rejection.

use std::path::PathBuf;

use firwav::FirError;
use firwav::wav::read_wav;

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("firwav-{}-{}", std::process::id(), name));
    path
}

fn le16(v: u16) -> [u8; 2] {
    v.to_le_bytes()
}

fn le32(v: u32) -> [u8; 4] {
    v.to_le_bytes()
}

/// Build a minimal mono 16-bit PCM WAV, optionally with an extra chunk
/// between "fmt " and "data".
fn build_wav(samples: &[i16], extra_chunk: Option<(&[u8; 4], &[u8])>) -> Vec<u8> {
    let sample_rate = 8000u32;
    let data_size = (samples.len() * 2) as u32;

    let mut body = Vec::new();
    body.extend_from_slice(b"WAVE");

    body.extend_from_slice(b"fmt ");
    body.extend_from_slice(&le32(16));
    body.extend_from_slice(&le16(1)); // PCM
    body.extend_from_slice(&le16(1)); // mono
    body.extend_from_slice(&le32(sample_rate));
    body.extend_from_slice(&le32(sample_rate * 2)); // byte rate
    body.extend_from_slice(&le16(2)); // block align
    body.extend_from_slice(&le16(16)); // bits per sample

    if let Some((id, payload)) = extra_chunk {
        body.extend_from_slice(id);
        body.extend_from_slice(&le32(payload.len() as u32));
        body.extend_from_slice(payload);
    }

    body.extend_from_slice(b"data");
    body.extend_from_slice(&le32(data_size));
    for &s in samples {
        body.extend_from_slice(&s.to_le_bytes());
    }

    let mut file = Vec::new();
    file.extend_from_slice(b"RIFF");
    file.extend_from_slice(&le32(body.len() as u32));
    file.extend_from_slice(&body);
    file
}

#[test]
fn test_non_data_chunk_is_skipped() {
    // A 10-byte "LIST" chunk sits between "fmt " and "data"; the scan must
    // step over it and land on the data chunk.
    let path = temp_path("list-chunk.wav");
    let samples: Vec<i16> = vec![10, -20, 30, -40, 50];
    let bytes = build_wav(&samples, Some((b"LIST", &[0u8; 10])));
    std::fs::write(&path, bytes).unwrap();

    let audio = read_wav(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(audio.sample_rate, 8000);
    assert_eq!(audio.samples, samples);
}

#[test]
fn test_plain_wav_reads_back() {
    let path = temp_path("plain.wav");
    let samples: Vec<i16> = (0..16).map(|i| i * 1000).collect();
    std::fs::write(&path, build_wav(&samples, None)).unwrap();

    let audio = read_wav(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(audio.channels, 1);
    assert_eq!(audio.bits_per_sample, 16);
    assert_eq!(audio.samples, samples);
}

#[test]
fn test_garbage_header_is_malformed() {
    let path = temp_path("garbage.wav");
    std::fs::write(&path, b"not a riff file at all............").unwrap();

    let err = read_wav(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, FirError::MalformedHeader(_)));
}
