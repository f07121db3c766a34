use std::collections::HashMap;

use bytes::Bytes;
use uuid::Uuid;

use super::codec;

/// A decoded audio chunk placed on the playback timeline.
#[derive(Debug, Clone)]
pub struct ScheduledChunk {
    pub id: Uuid,
    /// Seconds since session start at which this chunk should begin.
    pub start_at: f64,
    pub duration: f64,
    pub pcm: Bytes,
}

impl ScheduledChunk {
    pub fn end_at(&self) -> f64 {
        self.start_at + self.duration
    }
}

/// Queues model audio for gapless sequential playback.
///
/// Chunks are laid back-to-back behind a `next start time` cursor; when
/// playback has fallen behind real time the cursor clamps forward to
/// `now`. An interruption from the gateway drops everything still
/// pending and resets the cursor to zero.
pub struct PlaybackQueue {
    next_start: f64,
    pending: HashMap<Uuid, ScheduledChunk>,
}

impl PlaybackQueue {
    pub fn new() -> Self {
        Self {
            next_start: 0.0,
            pending: HashMap::new(),
        }
    }

    pub fn schedule(&mut self, pcm: Bytes, now: f64) -> ScheduledChunk {
        self.next_start = self.next_start.max(now);
        let duration = codec::chunk_duration_secs(pcm.len(), codec::OUTPUT_SAMPLE_RATE, 1);
        let chunk = ScheduledChunk {
            id: Uuid::new_v4(),
            start_at: self.next_start,
            duration,
            pcm,
        };
        self.next_start += duration;
        self.pending.insert(chunk.id, chunk.clone());
        chunk
    }

    /// Drops bookkeeping for chunks whose playback window has passed.
    pub fn reap(&mut self, now: f64) {
        self.pending.retain(|_, c| c.end_at() > now);
    }

    /// Flushes all pending chunks and resets the cursor. Returns how many
    /// chunks were dropped.
    pub fn interrupt(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        self.next_start = 0.0;
        dropped
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn next_start(&self) -> f64 {
        self.next_start
    }
}

impl Default for PlaybackQueue {
    fn default() -> Self {
        Self::new()
    }
}
