//! Shared access to one schedule across callers and threads

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::error::{Outcome, Result};
use super::manager::ScheduleManager;
use crate::task::Task;

/// Cloneable handle to a single [`ScheduleManager`].
///
/// Every clone refers to the same schedule. Each call holds the lock for
/// the whole validate, check, store and notify sequence, so concurrent
/// additions can never both slip into the same slot. Listeners run under
/// the lock and must not call back into the handle.
#[derive(Debug, Clone, Default)]
pub struct ScheduleHandle {
    inner: Arc<Mutex<ScheduleManager>>,
}

impl ScheduleHandle {
    pub fn new(manager: ScheduleManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScheduleManager> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_observer<F>(&self, listener: F)
    where
        F: Fn(&str) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.lock().add_observer(listener);
    }

    pub fn add_task(&self, task: Task) -> Result<Outcome> {
        self.lock().add_task(task)
    }

    pub fn remove_task(&self, description: &str) -> Result<Outcome> {
        self.lock().remove_task(description)
    }

    pub fn view_tasks(&self) -> String {
        self.lock().view_tasks()
    }

    /// Copy of the stored tasks in insertion order
    pub fn snapshot(&self) -> Vec<Task> {
        self.lock().tasks().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// True when both handles refer to the same schedule
    pub fn same_schedule(&self, other: &ScheduleHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
