// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stopwatch engine with lap splits.
//!
//! Two states, Stopped (initial) and Running. While running, elapsed time is
//! always recomputed from the host clock (`now - start_epoch_ms`), never by
//! accumulating tick deltas, so display refresh rate cannot drift the total.
//! Stopping freezes the accumulated value; starting again resumes from it.
//!
//! The display loop lives in [`spawn_ticker`]: a cooperative task that
//! re-arms itself after each tick and publishes the formatted elapsed time
//! through a watch channel until cancelled. Receivers are only notified when
//! the text changes, so a stopped watch publishes its frozen value once and
//! the tick goes quiet until the next start.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};

use crate::time_utils::{format_clock, format_lap};

/// Millisecond clock source, injectable for deterministic tests.
pub type Clock = Arc<dyn Fn() -> u64 + Send + Sync>;

/// A recorded lap split.
///
/// `id` doubles as the displayed ordinal label: ids are assigned 1, 2, 3, …
/// in recording order and deleting a lap never renumbers the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapRecord {
    pub id: u64,
    pub cumulative_elapsed_ms: u64,
    pub display_text: String,
}

/// Stopwatch state machine.
pub struct Stopwatch {
    clock: Clock,
    running: bool,
    accumulated_ms: u64,
    start_epoch_ms: u64,
    /// Newest lap first
    laps: Vec<LapRecord>,
    next_lap_id: u64,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::with_clock(Arc::new(|| chrono::Utc::now().timestamp_millis() as u64))
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stopwatch driven by the given clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            running: false,
            accumulated_ms: 0,
            start_epoch_ms: 0,
            laps: Vec::new(),
            next_lap_id: 1,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start, resuming from any previously accumulated time. No-op if running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.start_epoch_ms = (self.clock)().saturating_sub(self.accumulated_ms);
        self.running = true;
    }

    /// Stop, freezing the elapsed time. No-op if already stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.accumulated_ms = (self.clock)().saturating_sub(self.start_epoch_ms);
        self.running = false;
    }

    /// Stop if running, zero the elapsed time, clear all laps.
    pub fn reset(&mut self) {
        self.stop();
        self.accumulated_ms = 0;
        self.laps.clear();
        self.next_lap_id = 1;
    }

    /// Current elapsed milliseconds.
    ///
    /// While running this recomputes from the clock and refreshes the
    /// accumulated value; while stopped it returns the frozen value.
    pub fn elapsed_ms(&mut self) -> u64 {
        if self.running {
            self.accumulated_ms = (self.clock)().saturating_sub(self.start_epoch_ms);
        }
        self.accumulated_ms
    }

    /// Main display text, `HH:MM:SS.cc`.
    pub fn display(&mut self) -> String {
        format_clock(self.elapsed_ms())
    }

    /// Record a lap split. Valid only while running; returns the new record.
    pub fn lap(&mut self) -> Option<LapRecord> {
        if !self.running {
            return None;
        }

        let elapsed = self.elapsed_ms();
        let record = LapRecord {
            id: self.next_lap_id,
            cumulative_elapsed_ms: elapsed,
            display_text: format_lap(elapsed),
        };
        self.next_lap_id += 1;
        self.laps.insert(0, record.clone());
        Some(record)
    }

    /// Remove exactly the lap with the given id. Labels of the remaining
    /// laps keep their recorded order.
    pub fn delete_lap(&mut self, id: u64) -> bool {
        let before = self.laps.len();
        self.laps.retain(|lap| lap.id != id);
        self.laps.len() != before
    }

    /// Recorded laps, newest first.
    pub fn laps(&self) -> &[LapRecord] {
        &self.laps
    }
}

/// Handle for the display-refresh loop. Cancellation is idempotent and the
/// loop never publishes after it; dropping the handle cancels too.
pub struct TickerHandle {
    cancelled: Arc<AtomicBool>,
    task: tokio::task::JoinHandle<()>,
}

impl TickerHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.task.abort();
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Spawn the display-refresh loop for a shared stopwatch.
///
/// Each pass recomputes the elapsed time, publishes the formatted display if
/// it changed, then re-arms itself after `frame` (the host's refresh budget).
/// Stopping the stopwatch therefore silences the tick: the frozen display is
/// published once, after which receivers see no wakeups until the next start.
/// Returns the cancel handle and the receiving end of the display channel.
pub fn spawn_ticker(
    stopwatch: Arc<Mutex<Stopwatch>>,
    frame: Duration,
) -> (TickerHandle, watch::Receiver<String>) {
    let (tx, rx) = watch::channel(format_clock(0));
    let cancelled = Arc::new(AtomicBool::new(false));

    let flag = Arc::clone(&cancelled);
    let task = tokio::spawn(async move {
        loop {
            let text = stopwatch.lock().await.display();
            if flag.load(Ordering::SeqCst) || tx.is_closed() {
                break;
            }
            // The flag is re-checked under the channel lock so no
            // notification can land after cancel() returns.
            tx.send_if_modified(|current| {
                if flag.load(Ordering::SeqCst) || *current == text {
                    return false;
                }
                *current = text;
                true
            });
            tokio::time::sleep(frame).await;
        }
    });

    (TickerHandle { cancelled, task }, rx)
}
