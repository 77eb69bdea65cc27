use std::sync::{Arc, Mutex};
use license_attribution::prelude::*;

/// Mock ProgressReporter capturing every line it is handed
///
/// Lines are stored with a prefix naming the channel: `Progress: c/t - m`,
/// `Error: ` and `Completed: `; plain reports are stored as-is.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// True if any captured line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().unwrap().iter().any(|line| line.contains(needle))
    }

    fn push(&self, line: String) {
        self.lines.lock().unwrap().push(line);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let line = match message {
            Some(coordinate) => format!("Progress: {}/{} - {}", current, total, coordinate),
            None => format!("Progress: {}/{}", current, total),
        };
        self.push(line);
    }

    fn report_error(&self, message: &str) {
        self.push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Completed: {}", message));
    }
}
