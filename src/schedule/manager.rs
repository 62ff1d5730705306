//! Day schedule with overlap rejection

use tracing::{debug, warn};

use super::error::{Outcome, Result, ScheduleError, TimeField};
use super::notify::NotificationChannel;
use crate::task::{Task, TimeFormat};

/// Shown by [`ScheduleManager::view_tasks`] when nothing is scheduled
pub const NO_TASKS_MESSAGE: &str = "No tasks scheduled for the day.";

/// Holds the day's tasks in insertion order and broadcasts every change.
///
/// No two stored tasks overlap. Descriptions act as lookup keys for
/// removal but are not required to be unique.
#[derive(Debug, Default)]
pub struct ScheduleManager {
    tasks: Vec<Task>,
    channel: NotificationChannel,
    time_format: TimeFormat,
}

impl ScheduleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how start/end times are validated
    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    /// Register a listener for mutation messages
    pub fn add_observer<F>(&mut self, listener: F)
    where
        F: Fn(&str) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.channel.add_listener(listener);
    }

    /// Add a task unless its times are malformed or it overlaps a stored task.
    ///
    /// On conflict the error names the first overlapping task in insertion
    /// order. Listeners run only after the task is stored; a listener
    /// failure is returned but does not undo the addition.
    pub fn add_task(&mut self, task: Task) -> Result<Outcome> {
        let start = self.normalize_time(TimeField::Start, task.start_time())?;
        let end = self.normalize_time(TimeField::End, task.end_time())?;
        let task = task.with_times(start, end);

        if let Some(existing) = self.tasks.iter().find(|t| t.overlaps(&task)) {
            debug!(
                task = task.description(),
                conflict = existing.description(),
                "rejected overlapping task"
            );
            return Err(ScheduleError::Conflict {
                description: existing.description().to_string(),
            });
        }

        let description = task.description().to_string();
        debug!(
            task = %description,
            start = task.start_time(),
            end = task.end_time(),
            "task added"
        );
        self.tasks.push(task);

        self.notify(&format!("Task \"{}\" added successfully.", description))?;
        Ok(Outcome::Added { description })
    }

    /// Remove the first task whose description matches exactly
    pub fn remove_task(&mut self, description: &str) -> Result<Outcome> {
        let Some(index) = self
            .tasks
            .iter()
            .position(|t| t.description() == description)
        else {
            debug!(task = description, "no task to remove");
            return Err(ScheduleError::NotFound {
                description: description.to_string(),
            });
        };

        self.tasks.remove(index);
        debug!(task = description, "task removed");

        self.notify(&format!("Task \"{}\" removed successfully.", description))?;
        Ok(Outcome::Removed {
            description: description.to_string(),
        })
    }

    /// Render the schedule ordered by start time, one task per line
    pub fn view_tasks(&self) -> String {
        if self.tasks.is_empty() {
            return NO_TASKS_MESSAGE.to_string();
        }

        self.sorted_tasks()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Tasks ordered by start time. Ties keep insertion order.
    pub fn sorted_tasks(&self) -> Vec<&Task> {
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        sorted.sort_by(|a, b| a.start_time().cmp(b.start_time()));
        sorted
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// First task with the given description
    pub fn find(&self, description: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.description() == description)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Validate a bound and return it in fixed-width `HH:MM` form
    fn normalize_time(&self, field: TimeField, value: &str) -> Result<String> {
        self.time_format.normalize(value).ok_or_else(|| {
            debug!(%field, value, "rejected malformed time");
            ScheduleError::Validation {
                field,
                value: value.to_string(),
            }
        })
    }

    fn notify(&self, message: &str) -> Result<()> {
        self.channel.broadcast(message).map_err(|e| {
            warn!("Listener failed for '{}': {}", message, e);
            ScheduleError::Listener(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::create_task;
    use std::sync::{Arc, Mutex};

    fn task(description: &str, start: &str, end: &str) -> Task {
        create_task(description, start, end, "Easy")
    }

    fn recording_manager() -> (ScheduleManager, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let mut manager = ScheduleManager::new();
        manager.add_observer(move |msg: &str| {
            sink.lock().unwrap().push(msg.to_string());
            Ok(())
        });
        (manager, log)
    }

    #[test]
    fn test_add_non_overlapping_tasks() {
        let mut manager = ScheduleManager::new();
        assert!(manager.add_task(task("Late", "14:00", "15:00")).is_ok());
        assert!(manager.add_task(task("Early", "08:00", "09:00")).is_ok());

        assert_eq!(manager.len(), 2);
        assert_eq!(
            manager.view_tasks(),
            "08:00 - 09:00: Early [Easy]\n14:00 - 15:00: Late [Easy]"
        );
    }

    #[test]
    fn test_add_overlapping_task_conflicts() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("A", "09:00", "10:00")).unwrap();

        let err = manager.add_task(task("B", "09:30", "10:30")).unwrap_err();

        assert!(matches!(err, ScheduleError::Conflict { ref description } if description == "A"));
        assert_eq!(manager.len(), 1);
        assert!(manager.find("B").is_none());
    }

    #[test]
    fn test_conflict_names_first_in_insertion_order() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Second slot", "11:00", "12:00")).unwrap();
        manager.add_task(task("First slot", "09:00", "10:00")).unwrap();

        let err = manager.add_task(task("Wide", "08:00", "13:00")).unwrap_err();

        assert!(
            matches!(err, ScheduleError::Conflict { ref description } if description == "Second slot")
        );
    }

    #[test]
    fn test_touching_tasks_are_accepted() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("A", "09:00", "10:00")).unwrap();
        manager.add_task(task("B", "10:00", "11:00")).unwrap();
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_invalid_start_time_rejected() {
        let (mut manager, log) = recording_manager();

        let err = manager.add_task(task("Bad", "25:00", "26:00")).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Validation {
                field: TimeField::Start,
                ..
            }
        ));

        let err = manager.add_task(task("Bad", "9:60", "10:00")).unwrap_err();
        assert!(matches!(err, ScheduleError::Validation { .. }));

        assert!(manager.is_empty());
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_end_time_rejected() {
        let mut manager = ScheduleManager::new();
        let err = manager.add_task(task("Bad", "09:00", "9:30")).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Validation {
                field: TimeField::End,
                ref value,
            } if value == "9:30"
        ));
    }

    #[test]
    fn test_validation_runs_before_conflict_check() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("A", "09:00", "10:00")).unwrap();
        let err = manager.add_task(task("B", "09:30", "24:00")).unwrap_err();
        assert!(matches!(err, ScheduleError::Validation { .. }));
    }

    #[test]
    fn test_lenient_time_format_accepts_single_digit_hour() {
        let mut manager = ScheduleManager::new().with_time_format(TimeFormat::Lenient);
        assert!(manager.add_task(task("Early", "7:00", "7:30")).is_ok());
    }

    #[test]
    fn test_lenient_short_hour_stored_zero_padded() {
        let mut manager = ScheduleManager::new().with_time_format(TimeFormat::Lenient);
        manager
            .add_task(create_task("Gym", "9:00", "11:00", "Hard"))
            .unwrap();

        assert_eq!(manager.tasks()[0].start_time(), "09:00");
        assert_eq!(manager.tasks()[0].end_time(), "11:00");
    }

    #[test]
    fn test_lenient_mixed_forms_still_conflict() {
        let mut manager = ScheduleManager::new().with_time_format(TimeFormat::Lenient);
        manager
            .add_task(create_task("Gym", "9:00", "11:00", "Hard"))
            .unwrap();

        let err = manager.add_task(task("Call", "09:30", "10:00")).unwrap_err();

        assert!(matches!(err, ScheduleError::Conflict { ref description } if description == "Gym"));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_lenient_view_orders_by_clock() {
        let mut manager = ScheduleManager::new().with_time_format(TimeFormat::Lenient);
        manager.add_task(task("Late", "10:00", "10:30")).unwrap();
        manager.add_task(task("Early", "9:00", "9:45")).unwrap();

        assert_eq!(
            manager.view_tasks(),
            "09:00 - 09:45: Early [Easy]\n10:00 - 10:30: Late [Easy]"
        );
    }

    #[test]
    fn test_add_broadcasts_success_message() {
        let (mut manager, log) = recording_manager();
        manager.add_task(task("Standup", "09:00", "09:15")).unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec!["Task \"Standup\" added successfully.".to_string()]
        );
    }

    #[test]
    fn test_conflict_does_not_broadcast() {
        let (mut manager, log) = recording_manager();
        manager.add_task(task("A", "09:00", "10:00")).unwrap();
        let _ = manager.add_task(task("B", "09:00", "10:00"));
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_task() {
        let (mut manager, log) = recording_manager();
        manager.add_task(task("Standup", "09:00", "09:15")).unwrap();

        let outcome = manager.remove_task("Standup").unwrap();

        assert_eq!(
            outcome,
            Outcome::Removed {
                description: "Standup".to_string()
            }
        );
        assert!(manager.is_empty());
        assert_eq!(
            log.lock().unwrap().last().map(String::as_str),
            Some("Task \"Standup\" removed successfully.")
        );
    }

    #[test]
    fn test_remove_from_empty_manager() {
        let (mut manager, log) = recording_manager();
        let err = manager.remove_task("Anything").unwrap_err();
        assert!(matches!(err, ScheduleError::NotFound { .. }));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_remove_unknown_description_leaves_tasks() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Standup", "09:00", "09:15")).unwrap();

        assert!(manager.remove_task("standup").is_err());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_duplicate_descriptions_allowed_and_first_removed() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Break", "15:00", "15:15")).unwrap();
        manager.add_task(task("Break", "10:00", "10:15")).unwrap();

        manager.remove_task("Break").unwrap();

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.tasks()[0].start_time(), "10:00");
    }

    #[test]
    fn test_view_empty() {
        let manager = ScheduleManager::new();
        assert_eq!(manager.view_tasks(), NO_TASKS_MESSAGE);
        assert_eq!(manager.view_tasks(), manager.view_tasks());
    }

    #[test]
    fn test_view_does_not_reorder_storage() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Lunch", "12:00", "13:00")).unwrap();
        manager.add_task(task("Standup", "09:00", "09:15")).unwrap();

        let first = manager.view_tasks();
        let second = manager.view_tasks();

        assert_eq!(first, second);
        assert_eq!(manager.tasks()[0].description(), "Lunch");
        assert_eq!(manager.tasks()[1].description(), "Standup");
    }

    #[test]
    fn test_sort_is_stable_for_equal_start() {
        // Equal starts only coexist when an inverted task slips past the
        // overlap check.
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Inverted", "10:00", "09:00")).unwrap();
        manager.add_task(task("Normal", "10:00", "11:00")).unwrap();

        let order: Vec<&str> = manager
            .sorted_tasks()
            .iter()
            .map(|t| t.description())
            .collect();
        assert_eq!(order, vec!["Inverted", "Normal"]);
    }

    #[test]
    fn test_inverted_task_quirk() {
        // start >= end is not rejected. With the plain string formula an
        // inverted task overlaps nothing that starts at or after its start,
        // nor anything that ends at or before its end.
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Inverted", "12:00", "08:00")).unwrap();

        assert!(manager.add_task(task("Morning", "07:00", "08:00")).is_ok());
        assert!(manager.add_task(task("Noon", "12:00", "13:00")).is_ok());
        assert_eq!(manager.len(), 3);

        // A task spanning from before the inverted end to after the
        // inverted start does collide with it.
        let err = manager.add_task(task("Span", "07:00", "13:00")).unwrap_err();
        assert!(
            matches!(err, ScheduleError::Conflict { ref description } if description == "Inverted")
        );
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn test_listener_failure_keeps_mutation() {
        let mut manager = ScheduleManager::new();
        manager.add_observer(|_: &str| anyhow::bail!("listener down"));

        let err = manager.add_task(task("Kept", "09:00", "10:00")).unwrap_err();

        assert!(matches!(err, ScheduleError::Listener(_)));
        assert_eq!(manager.len(), 1);

        let err = manager.remove_task("Kept").unwrap_err();
        assert!(matches!(err, ScheduleError::Listener(_)));
        assert!(manager.is_empty());
    }
}
