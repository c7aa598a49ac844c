//! JSON-lines message feed.
//!
//! Each feed line is one serialized [`MessageEnvelope`]. The feed never
//! aborts on bad input: malformed lines are skipped with a warning and
//! read errors end the feed after logging.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{trace, warn};

use framesync_bridge::{MessageChannel, MessageEnvelope};

/// Counters for one feed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeedStats {
    pub delivered: u64,
    pub skipped: u64,
}

/// Read envelopes line by line and deliver each one on the channel.
///
/// Runs until end of input. With `trace_messages` set, every raw line is
/// logged at trace level before it is parsed.
pub async fn run<R>(reader: R, channel: &MessageChannel, trace_messages: bool) -> FeedStats
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut stats = FeedStats::default();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "feed read error, stopping");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if trace_messages {
            trace!(raw = line, "feed line");
        }

        match MessageEnvelope::from_json(line) {
            Some(envelope) => {
                channel.deliver(&envelope);
                stats.delivered += 1;
            }
            None => {
                warn!(line, "skipping malformed feed line");
                stats.skipped += 1;
            }
        }
    }

    stats
}
