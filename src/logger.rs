use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Tagged, timestamped lines on stderr. Stdout is left to codec output.
#[derive(Clone, Copy)]
pub struct Logger {
    target: &'static str,
    chronometer: Chronometer,
}

impl Logger {
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            chronometer: Chronometer::new(),
        }
    }

    fn line(&self, value: impl Display) -> String {
        format!("[{}] {} ({} elapsed)", self.target, value, self.chronometer)
    }

    pub fn log(&self, value: impl Display) {
        eprintln!("{}", self.line(value));
    }

    pub fn progress<D: Display>(&self, index: usize, count: usize, f: impl FnOnce() -> D) {
        if is_milestone(index, count) {
            self.log(format!("{} ({}/{})", f(), index + 1, count));
        }
    }
}

// The first item, then roughly every quarter of `count`.
fn is_milestone(index: usize, count: usize) -> bool {
    index % (count / 4).max(1) == 0
}
