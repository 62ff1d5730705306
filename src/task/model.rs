//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority labels offered by the console prompt. Any text is accepted.
pub const SUGGESTED_PRIORITIES: [&str; 3] = ["Easy", "Medium", "Hard"];

/// A time-bounded task within a single day
///
/// Times are kept exactly as entered; validation happens when the task is
/// offered to a [`crate::schedule::ScheduleManager`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,
    start_time: String,
    end_time: String,
    priority: String,
}

impl Task {
    pub fn new(
        description: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            priority: priority.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn priority(&self) -> &str {
        &self.priority
    }

    /// Same task with its bounds replaced
    pub fn with_times(self, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            ..self
        }
    }

    /// Half-open interval overlap, compared as `HH:MM` strings.
    ///
    /// Bounds are not required to be ordered; an inverted task goes through
    /// the same comparison unchanged.
    pub fn overlaps(&self, other: &Task) -> bool {
        self.start_time.as_str() < other.end_time.as_str()
            && other.start_time.as_str() < self.end_time.as_str()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} [{}]",
            self.start_time, self.end_time, self.description, self.priority
        )
    }
}

/// Build a task from raw fields. Performs no validation.
pub fn create_task(description: &str, start_time: &str, end_time: &str, priority: &str) -> Task {
    Task::new(description, start_time, end_time, priority)
}
