use std::fmt;

use thiserror::Error;

/// Which bound of a task failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeField::Start => write!(f, "start time"),
            TimeField::End => write!(f, "end time"),
        }
    }
}

/// Rejected or partially failed schedule mutations.
///
/// Display strings are the messages shown to console users.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Error: Invalid time format.")]
    Validation { field: TimeField, value: String },

    #[error("Error: Task conflicts with existing task \"{description}\".")]
    Conflict { description: String },

    #[error("Error: Task not found.")]
    NotFound { description: String },

    /// A listener failed after the mutation was already applied.
    #[error("Error: Notification listener failed: {0}")]
    Listener(anyhow::Error),
}

impl ScheduleError {
    /// True when the task collection was left untouched
    pub fn is_rejection(&self) -> bool {
        !matches!(self, ScheduleError::Listener(_))
    }
}

/// Successful schedule mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { description: String },
    Removed { description: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added { .. } => write!(f, "Task added successfully. No conflicts."),
            Outcome::Removed { .. } => write!(f, "Task removed successfully."),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
