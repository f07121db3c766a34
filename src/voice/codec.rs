//! Raw audio glue: base64 framing and 16-bit little-endian PCM
//! conversion. No resampling, no compression; the gateway speaks plain
//! PCM on both directions and only the rates differ.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Microphone input, as the gateway expects it.
pub const INPUT_SAMPLE_RATE: u32 = 16_000;
/// Model speech output.
pub const OUTPUT_SAMPLE_RATE: u32 = 24_000;

pub const BYTES_PER_SAMPLE: usize = 2;

pub fn decode_base64(data: &str) -> anyhow::Result<Vec<u8>> {
    Ok(BASE64.decode(data)?)
}

pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Interprets bytes as little-endian PCM16 and scales to [-1.0, 1.0].
/// A trailing odd byte is dropped.
pub fn pcm16_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32_768.0)
        .collect()
}

/// Clamps samples to [-1.0, 1.0] and packs them as little-endian PCM16.
pub fn f32_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * BYTES_PER_SAMPLE);
    for s in samples {
        let clamped = s.clamp(-1.0, 1.0);
        let v = (clamped * 32_767.0) as i16;
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

/// Reinterprets little-endian bytes as f32 samples, as produced by a Web
/// Audio capture node. A trailing partial sample is dropped.
pub fn le_bytes_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

/// Peak amplitude of a chunk, for level meters.
pub fn peak_level(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
}

/// Playback duration of a raw PCM16 chunk.
pub fn chunk_duration_secs(byte_len: usize, sample_rate: u32, channels: u16) -> f64 {
    let frames = byte_len / (BYTES_PER_SAMPLE * channels as usize);
    frames as f64 / sample_rate as f64
}
