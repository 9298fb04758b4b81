// Stridewatch — Metrics Panel
//
// Draws the four session metrics as text lines onto any monochrome draw
// target, so the same renderer serves an SSD1306-class module or a test
// framebuffer.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::Text,
};

use crate::events::TelemetrySnapshot;

const LINE_HEIGHT: i32 = 12;
const FIRST_BASELINE: i32 = 10;

pub struct MetricsPanel<D> {
    display: D,
}

impl<D> MetricsPanel<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(display: D) -> Self {
        Self { display }
    }

    /// Clear the panel and draw the snapshot as four text lines.
    pub fn render(&mut self, snapshot: &TelemetrySnapshot) -> Result<(), D::Error> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let (hours, minutes, seconds) = snapshot.hms();

        self.display.clear(BinaryColor::Off)?;

        let lines = [
            format!("Time: {hours:02}:{minutes:02}:{seconds:02}"),
            format!("Distance: {} m", snapshot.distance_m as u32),
            format!("Steps: {}", snapshot.steps),
            format!("Calories: {}", snapshot.calories),
        ];
        for (i, line) in lines.iter().enumerate() {
            let baseline = Point::new(0, FIRST_BASELINE + LINE_HEIGHT * i as i32);
            Text::new(line, baseline, style).draw(&mut self.display)?;
        }

        Ok(())
    }

    pub fn into_inner(self) -> D {
        self.display
    }
}
