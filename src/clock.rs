// Stridewatch — Periodic Tick Source
//
// Two independent periodic signals, produced on dedicated ticker threads the
// way a firmware build would produce them from timer interrupts:
//
//   - sample-due, ~2 Hz: a single-slot mailbox. The ticker stores `true`;
//     the sampler drains it with `swap(false)`. If a cycle is still running
//     when the next tick lands, the store overwrites and the missed cycle is
//     simply lost — no queueing, no backpressure.
//   - elapsed-seconds, 1 Hz: a plain counter.
//
// These two atomics are the only state shared across the tick/loop boundary,
// so no half-updated invariant can ever be observed.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Shared handles the sampler reads each iteration.
#[derive(Clone)]
pub struct TickSource {
    sample_due: Arc<AtomicBool>,
    elapsed_secs: Arc<AtomicU32>,
}

impl TickSource {
    pub fn new() -> Self {
        Self {
            sample_due: Arc::new(AtomicBool::new(false)),
            elapsed_secs: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Drain the sample-due mailbox. Returns `true` at most once per tick.
    pub fn take_sample_due(&self) -> bool {
        self.sample_due.swap(false, Ordering::AcqRel)
    }

    /// Whole seconds since the tickers started.
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs.load(Ordering::Relaxed)
    }

    /// Post a sample-due tick (ticker side).
    pub fn post_sample_due(&self) {
        self.sample_due.store(true, Ordering::Release);
    }

    /// Advance the seconds counter (ticker side).
    pub fn post_second_elapsed(&self) {
        self.elapsed_secs.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for TickSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn the two ticker threads. They run until `running` clears.
pub fn spawn_tickers(
    ticks: &TickSource,
    sample_period: Duration,
    second_period: Duration,
    running: Arc<AtomicBool>,
) -> std::io::Result<()> {
    let sample_ticks = ticks.clone();
    let sample_running = Arc::clone(&running);
    thread::Builder::new().name("tick-sample".into()).spawn(move || {
        while sample_running.load(Ordering::SeqCst) {
            thread::sleep(sample_period);
            sample_ticks.post_sample_due();
        }
    })?;

    let second_ticks = ticks.clone();
    let second_running = running;
    thread::Builder::new().name("tick-second".into()).spawn(move || {
        while second_running.load(Ordering::SeqCst) {
            thread::sleep(second_period);
            second_ticks.post_second_elapsed();
        }
    })?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
