//! Day Planner library - conflict-checked scheduling for a single day
//!
//! Tasks are added to one shared schedule, rejected when their times are
//! malformed or overlap an existing task, and every change is broadcast to
//! registered listeners.

pub mod cli;
pub mod config;
pub mod schedule;
pub mod task;
