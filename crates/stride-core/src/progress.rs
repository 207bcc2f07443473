//! Progress indicator derived from the controller's position.

/// One entry of the step indicator row.
#[derive(Debug, Clone, PartialEq)]
pub struct StepMarker {
    pub title: String,
    /// Reached or current
    pub active: bool,
}

/// Completion percentage plus per-step active flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub current_index: usize,
    pub percentage: f64,
    pub markers: Vec<StepMarker>,
}

impl Progress {
    /// Computes the progress for `current_index` within `titles`.
    ///
    /// `percentage` is `(current_index + 1) / titles.len() * 100`; step `i`
    /// is active iff `i <= current_index`. An empty title list yields 0%.
    pub fn compute<S: AsRef<str>>(current_index: usize, titles: &[S]) -> Self {
        Self {
            current_index,
            percentage: percentage(current_index, titles.len()),
            markers: titles
                .iter()
                .enumerate()
                .map(|(i, title)| StepMarker {
                    title: title.as_ref().to_string(),
                    active: i <= current_index,
                })
                .collect(),
        }
    }

    pub fn step_count(&self) -> usize {
        self.markers.len()
    }
}

/// `(current_index + 1) / step_count * 100`, or 0 for an empty wizard.
pub fn percentage(current_index: usize, step_count: usize) -> f64 {
    if step_count == 0 {
        return 0.0;
    }
    (current_index + 1) as f64 / step_count as f64 * 100.0
}
