// Stridewatch — Display Task
//
// Owns the output surface and renders each telemetry snapshot as it arrives.
// Publishing is fire-and-forget: a surface must never block the producing
// cycle for long, and a failed draw is logged, not propagated.

use std::sync::mpsc::Receiver;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::BinaryColor;

use crate::drivers::panel::MetricsPanel;
use crate::events::TelemetrySnapshot;

/// Anything that can show one telemetry snapshot per cycle.
pub trait TelemetrySurface {
    fn publish(&mut self, snapshot: &TelemetrySnapshot);
}

/// Renders snapshots as console log lines.
pub struct ConsoleSurface;

impl TelemetrySurface for ConsoleSurface {
    fn publish(&mut self, snapshot: &TelemetrySnapshot) {
        let (hours, minutes, seconds) = snapshot.hms();
        log::info!(
            "time {hours:02}:{minutes:02}:{seconds:02} | distance {distance:7.1} m | steps {steps:4} | calories {calories:4} kcal",
            distance = snapshot.distance_m,
            steps = snapshot.steps,
            calories = snapshot.calories,
        );
    }
}

impl<D> TelemetrySurface for MetricsPanel<D>
where
    D: DrawTarget<Color = BinaryColor>,
    D::Error: core::fmt::Debug,
{
    fn publish(&mut self, snapshot: &TelemetrySnapshot) {
        if let Err(e) = self.render(snapshot) {
            log::warn!("Panel draw failed: {e:?}");
        }
    }
}

pub fn display_task<S: TelemetrySurface>(snapshot_rx: Receiver<TelemetrySnapshot>, mut surface: S) {
    log::info!("Display task started");

    loop {
        match snapshot_rx.recv() {
            Ok(snapshot) => surface.publish(&snapshot),
            Err(_) => {
                log::warn!("Snapshot channel closed — exiting display task");
                return;
            }
        }
    }
}
