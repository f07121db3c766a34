use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use bytes::Bytes;
use futures_util::{SinkExt, StreamExt};
use tokio::time::Instant;
use tracing::{debug, error, info, instrument};

use super::dto::{ClientFrame, ServerFrame};
use super::playback::PlaybackQueue;
use super::{codec, services};
use crate::gemini::live::LiveSession;
use crate::state::AppState;

/// Upgrades to a WebSocket and bridges the browser to the gateway's live
/// audio session for the lifetime of the connection.
#[instrument(skip(state, ws))]
pub async fn live_session(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = bridge(state, socket).await {
            error!(error = %e, "voice session ended with error");
        }
    })
}

async fn bridge(state: AppState, client_ws: WebSocket) -> anyhow::Result<()> {
    let profile = state.profile.read().await.clone();
    let recent = state.journal.recent(services::RECENT_LOG_WINDOW).await;
    let instruction = services::live_system_instruction(&profile, &recent);

    let session = LiveSession::connect(
        &state.config.api_key,
        &state.config.models.live,
        &instruction,
        services::VOICE_NAME,
    )
    .await?;
    info!(model = %state.config.models.live, "live session opened");

    let started = Instant::now();
    let mut queue = PlaybackQueue::new();
    let (mut up_tx, mut up_rx) = session.split();
    let (mut client_tx, mut client_rx) = client_ws.split();

    loop {
        tokio::select! {
            frame = client_rx.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    let parsed: ClientFrame = match serde_json::from_str(&text) {
                        Ok(f) => f,
                        Err(e) => {
                            debug!(error = %e, "ignoring malformed client frame");
                            continue;
                        }
                    };
                    if let Some(audio) = parsed.audio {
                        up_tx.send_audio(&audio).await?;
                    }
                }
                Some(Ok(Message::Binary(raw))) => {
                    // Raw f32 capture samples; pack to PCM16 before relay.
                    let samples = codec::le_bytes_to_f32(&raw);
                    let pcm = codec::f32_to_pcm16(&samples);
                    up_tx.send_audio(&codec::encode_base64(&pcm)).await?;
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
            },
            upstream = up_rx.next_message() => match upstream? {
                Some(msg) => {
                    let now = started.elapsed().as_secs_f64();
                    queue.reap(now);

                    if msg.is_interrupted() {
                        let dropped = queue.interrupt();
                        debug!(dropped, "gateway interruption, playback flushed");
                        let frame = serde_json::to_string(&ServerFrame::interrupted())?;
                        client_tx.send(Message::Text(frame)).await?;
                    }

                    if let Some(b64) = msg.audio_chunk() {
                        let pcm = Bytes::from(codec::decode_base64(b64)?);
                        let level = codec::peak_level(&codec::pcm16_to_f32(&pcm));
                        let chunk = queue.schedule(pcm, now);
                        let frame = serde_json::to_string(&ServerFrame::audio(&chunk, level))?;
                        client_tx.send(Message::Text(frame)).await?;
                    }
                }
                None => break,
            },
        }
    }

    up_tx.close().await.ok();
    info!("live session closed");
    Ok(())
}
