//! Task values and time validation
//!
//! - `Task`: an immutable description, start/end time and priority label
//! - `create_task`: the construction helper used by front-ends
//! - `TimeFormat`: `HH:MM` checking used by the schedule manager

pub mod model;
pub mod time;

pub use model::{create_task, Task, SUGGESTED_PRIORITIES};
pub use time::{is_valid_time, TimeFormat};
