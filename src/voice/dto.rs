use serde::{Deserialize, Serialize};

use super::codec;
use super::playback::ScheduledChunk;

/// Frame from the browser: one base64 chunk of 16 kHz PCM16 microphone
/// audio. Binary WebSocket frames instead carry the capture node's raw
/// little-endian f32 samples, which the server packs to PCM16 itself.
#[derive(Debug, Deserialize)]
pub struct ClientFrame {
    #[serde(default)]
    pub audio: Option<String>,
}

/// Frame to the browser: either a scheduled audio chunk or an
/// interruption marker telling it to flush its own playback.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerFrame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupted: Option<bool>,
}

impl ServerFrame {
    pub fn audio(chunk: &ScheduledChunk, level: f32) -> Self {
        Self {
            audio: Some(codec::encode_base64(&chunk.pcm)),
            start_at: Some(chunk.start_at),
            level: Some(level),
            interrupted: None,
        }
    }

    pub fn interrupted() -> Self {
        Self {
            audio: None,
            start_at: None,
            level: None,
            interrupted: Some(true),
        }
    }
}
