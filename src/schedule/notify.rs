//! Broadcast of schedule mutation messages to registered listeners

use anyhow::{Context, Result};
use std::fmt;
use std::sync::mpsc;

/// Listener callback type
pub type Listener = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;

/// Ordered list of listeners, invoked synchronously on every broadcast
#[derive(Default)]
pub struct NotificationChannel {
    listeners: Vec<Listener>,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners run in registration order.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: Fn(&str) -> Result<()> + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver `message` to every listener.
    ///
    /// Stops at the first failing listener and returns its error; later
    /// listeners are not called.
    pub fn broadcast(&self, message: &str) -> Result<()> {
        for listener in &self.listeners {
            listener(message)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationChannel")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Listener that forwards each message over an mpsc channel.
///
/// Fails once the receiving side has been dropped.
pub fn forward_to(sender: mpsc::Sender<String>) -> impl Fn(&str) -> Result<()> + Send + Sync {
    move |message: &str| {
        sender
            .send(message.to_string())
            .context("notification receiver disconnected")
    }
}
