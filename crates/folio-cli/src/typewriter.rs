//! Timer-driven typewriter effect.
//!
//! Wraps the pure [`TypingSequence`] in a tokio interval and exposes the
//! snapshot sequence as a cancellable async stream. Emission timestamps
//! are approximate; the guaranteed invariant is the monotone reveal with
//! the terminal snapshot emitted exactly once.

use std::time::Duration;

use async_stream::stream;
use futures_util::{Stream, StreamExt, pin_mut};
use tokio_util::sync::CancellationToken;

use folio_core::TypingSequence;

/// Floor for the per-character delay. A zero delay would spin the timer.
pub const MIN_DELAY: Duration = Duration::from_millis(1);

pub fn clamp_delay(delay: Duration) -> Duration {
    delay.max(MIN_DELAY)
}

/// Emit every snapshot of `text`: the empty prefix immediately, then one
/// more character per tick of `delay`. The stream ends after the full
/// text, or as soon as `token` is cancelled. Cancellation is idempotent;
/// a cancelled stream emits nothing further.
pub fn snapshots(
    text: impl Into<String>,
    delay: Duration,
    token: CancellationToken,
) -> impl Stream<Item = String> {
    let mut seq = TypingSequence::new(text);
    let delay = clamp_delay(delay);

    stream! {
        if token.is_cancelled() {
            return;
        }
        yield seq.snapshot().to_string();

        let mut ticker = tokio::time::interval(delay);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // An interval's first tick completes immediately; consume it so
        // the first revealed character lands one delay after start.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = ticker.tick() => {
                    match seq.advance() {
                        Some(snapshot) => yield snapshot.to_string(),
                        None => return,
                    }
                }
            }
        }
    }
}

/// Snapshot from one stage of a chained sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StagedSnapshot {
    First(String),
    Second(String),
}

/// Type `first` to completion, wait `initiation_delay`, then type
/// `second`. The second stage never starts before both the first stage has
/// completed and the delay has elapsed.
pub fn chained(
    first: impl Into<String>,
    second: impl Into<String>,
    delay: Duration,
    initiation_delay: Duration,
    token: CancellationToken,
) -> impl Stream<Item = StagedSnapshot> {
    let first = first.into();
    let second = second.into();

    stream! {
        let head = snapshots(first, delay, token.clone());
        pin_mut!(head);
        while let Some(snapshot) = head.next().await {
            yield StagedSnapshot::First(snapshot);
        }
        if token.is_cancelled() {
            return;
        }

        tokio::select! {
            _ = token.cancelled() => return,
            _ = tokio::time::sleep(initiation_delay) => {}
        }

        let tail = snapshots(second, delay, token.clone());
        pin_mut!(tail);
        while let Some(snapshot) = tail.next().await {
            yield StagedSnapshot::Second(snapshot);
        }
    }
}
