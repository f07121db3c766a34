//! Bidirectional live-audio session against the gateway's
//! `BidiGenerateContent` WebSocket endpoint.
//!
//! The protocol is: one `setup` frame selecting model, voice and system
//! instruction, then interleaved `realtimeInput` frames carrying base64
//! 16 kHz PCM upstream and `serverContent` frames carrying base64 24 kHz
//! PCM downstream. The server may signal `interrupted` mid-turn, which
//! obliges the receiver to flush any audio not yet played.

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::debug;

use super::types::{Content, InlineData};
use super::GeminiError;

type LiveStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

const LIVE_ENDPOINT: &str = "wss://generativelanguage.googleapis.com/ws/google.ai.generativelanguage.v1beta.GenerativeService.BidiGenerateContent";

pub const INPUT_MIME_TYPE: &str = "audio/pcm;rate=16000";

#[derive(Debug, Serialize)]
struct SetupFrame {
    setup: SetupPayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SetupPayload {
    model: String,
    generation_config: LiveGenerationConfig,
    system_instruction: Content,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LiveGenerationConfig {
    response_modalities: Vec<String>,
    speech_config: SpeechConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RealtimeInputFrame {
    realtime_input: RealtimeInputPayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RealtimeInputPayload {
    media_chunks: Vec<InlineData>,
}

/// One downstream frame from the live session.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerMessage {
    #[serde(default)]
    pub setup_complete: Option<serde_json::Value>,
    #[serde(default)]
    server_content: Option<ServerContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServerContent {
    #[serde(default)]
    model_turn: Option<Content>,
    #[serde(default)]
    interrupted: Option<bool>,
    #[serde(default)]
    #[allow(dead_code)]
    turn_complete: Option<bool>,
}

impl ServerMessage {
    /// base64 PCM payload of the model turn, when present.
    pub fn audio_chunk(&self) -> Option<&str> {
        self.server_content
            .as_ref()?
            .model_turn
            .as_ref()?
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .map(|d| d.data.as_str())
    }

    pub fn is_interrupted(&self) -> bool {
        self.server_content
            .as_ref()
            .and_then(|c| c.interrupted)
            .unwrap_or(false)
    }
}

/// An open live-audio session.
pub struct LiveSession {
    ws: LiveStream,
}

impl LiveSession {
    /// Dials the gateway and sends the setup frame. The session is usable
    /// as soon as this returns; the `setupComplete` ack arrives as a
    /// regular [`ServerMessage`].
    pub async fn connect(
        api_key: &str,
        model: &str,
        system_instruction: &str,
        voice_name: &str,
    ) -> Result<Self, GeminiError> {
        let url = format!("{LIVE_ENDPOINT}?key={api_key}");
        let (mut ws, _) = connect_async(url.as_str()).await?;

        let setup = SetupFrame {
            setup: SetupPayload {
                model: format!("models/{model}"),
                generation_config: LiveGenerationConfig {
                    response_modalities: vec!["AUDIO".into()],
                    speech_config: SpeechConfig {
                        voice_config: VoiceConfig {
                            prebuilt_voice_config: PrebuiltVoiceConfig {
                                voice_name: voice_name.to_string(),
                            },
                        },
                    },
                },
                system_instruction: Content::system_text(system_instruction),
            },
        };
        ws.send(Message::Text(serde_json::to_string(&setup)?)).await?;
        debug!(model, voice = voice_name, "live session setup sent");

        Ok(Self { ws })
    }

    /// Splits into independently owned send/receive halves so callers can
    /// pump both directions concurrently.
    pub fn split(self) -> (LiveSender, LiveReceiver) {
        let (tx, rx) = self.ws.split();
        (LiveSender { tx }, LiveReceiver { rx })
    }
}

pub struct LiveSender {
    tx: SplitSink<LiveStream, Message>,
}

impl LiveSender {
    /// Forwards one base64-encoded 16 kHz PCM chunk upstream.
    pub async fn send_audio(&mut self, base64_pcm: &str) -> Result<(), GeminiError> {
        let frame = RealtimeInputFrame {
            realtime_input: RealtimeInputPayload {
                media_chunks: vec![InlineData {
                    mime_type: INPUT_MIME_TYPE.to_string(),
                    data: base64_pcm.to_string(),
                }],
            },
        };
        self.tx
            .send(Message::Text(serde_json::to_string(&frame)?))
            .await?;
        Ok(())
    }

    pub async fn close(&mut self) -> Result<(), GeminiError> {
        self.tx.close().await?;
        Ok(())
    }
}

pub struct LiveReceiver {
    rx: SplitStream<LiveStream>,
}

impl LiveReceiver {
    /// Next downstream message; `None` once the gateway closed the stream.
    pub async fn next_message(&mut self) -> Result<Option<ServerMessage>, GeminiError> {
        while let Some(frame) = self.rx.next().await {
            match frame? {
                Message::Text(text) => return Ok(Some(serde_json::from_str(&text)?)),
                Message::Binary(bytes) => return Ok(Some(serde_json::from_slice(&bytes)?)),
                Message::Close(_) => return Ok(None),
                // Pings are answered by the transport.
                _ => continue,
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_audio_frame_exposes_inline_data() {
        let raw = serde_json::json!({
            "serverContent": {
                "modelTurn": {
                    "parts": [{
                        "inlineData": { "mimeType": "audio/pcm;rate=24000", "data": "AAAA" }
                    }]
                }
            }
        });
        let msg: ServerMessage = serde_json::from_value(raw).unwrap();
        assert_eq!(msg.audio_chunk(), Some("AAAA"));
        assert!(!msg.is_interrupted());
    }

    #[test]
    fn interruption_frame_is_detected() {
        let raw = serde_json::json!({ "serverContent": { "interrupted": true } });
        let msg: ServerMessage = serde_json::from_value(raw).unwrap();
        assert!(msg.is_interrupted());
        assert!(msg.audio_chunk().is_none());
    }

    #[test]
    fn setup_complete_frame_parses_to_empty_message() {
        let msg: ServerMessage = serde_json::from_str(r#"{"setupComplete":{}}"#).unwrap();
        assert!(msg.setup_complete.is_some());
        assert!(msg.audio_chunk().is_none());
        assert!(!msg.is_interrupted());
    }
}
