//! Progress bar and step indicator rendering.

use std::fmt;

use crate::progress::Progress;

/// Width of the textual progress bar, in cells.
const BAR_WIDTH: usize = 20;

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = ((self.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        writeln!(
            f,
            "Step {} of {} [{}{}] {:.0}%",
            self.current_index + 1,
            self.step_count(),
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            self.percentage
        )?;

        let markers: Vec<String> = self
            .markers
            .iter()
            .map(|marker| {
                let icon = if marker.active { "●" } else { "○" };
                format!("{icon} {}", marker.title)
            })
            .collect();
        writeln!(f, "{}", markers.join("  "))
    }
}
