//! Day schedule management
//!
//! This module owns the conflict-checked task collection:
//! - `ScheduleManager`: validation, overlap detection, removal, listing
//! - `NotificationChannel`: mutation messages to registered listeners
//! - `ScheduleHandle`: one shared schedule for the life of the program

pub mod error;
pub mod handle;
pub mod manager;
pub mod notify;

pub use error::{Outcome, ScheduleError, TimeField};
pub use handle::ScheduleHandle;
pub use manager::{ScheduleManager, NO_TASKS_MESSAGE};
pub use notify::{forward_to, Listener, NotificationChannel};
