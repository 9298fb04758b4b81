// Stridewatch — Sampler Task
//
// The single worker loop. Drains the sample-due mailbox, reads one raw gyro
// sample, runs the full processing pipeline, and pushes the resulting
// snapshot to the display channel. Everything between tick and snapshot is
// synchronous arithmetic.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::clock::TickSource;
use crate::config::MAILBOX_POLL_MS;
use crate::drivers::gyro::RateGyro;
use crate::events::TelemetrySnapshot;
use crate::pipeline::Pipeline;

pub fn sampler_task<G: RateGyro>(
    mut gyro: G,
    mut pipeline: Pipeline,
    ticks: TickSource,
    running: Arc<AtomicBool>,
    snapshot_tx: Sender<TelemetrySnapshot>,
) {
    log::info!("Sampler task started");

    let idle = Duration::from_millis(MAILBOX_POLL_MS);

    while running.load(Ordering::SeqCst) {
        if !ticks.take_sample_due() {
            thread::sleep(idle);
            continue;
        }

        let raw = match gyro.read_sample() {
            Ok(raw) => raw,
            Err(e) => {
                // No retry path: without the sensor the session cannot proceed.
                log::error!("Gyro read failed: {e} — ending session");
                return;
            }
        };

        let snapshot = pipeline.process_sample(raw, ticks.elapsed_secs());

        if snapshot_tx.send(snapshot).is_err() {
            // Receiver dropped — display task has exited. Shut down cleanly.
            log::warn!("Snapshot channel closed — exiting sampler task");
            return;
        }
    }

    log::info!("Sampler task stopped");
}
