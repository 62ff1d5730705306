//! Interactive menu front-end for the planner

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;

use crate::config::Config;
use crate::schedule::{forward_to, Outcome, ScheduleError, ScheduleHandle, ScheduleManager};
use crate::task::{create_task, SUGGESTED_PRIORITIES};

const MENU: &str = "\nMenu:\n1. Add Task\n2. Remove Task\n3. View Tasks\n4. Exit";

enum Step {
    Continue,
    Quit,
}

/// Line-oriented menu over any reader/writer pair
pub struct Console<R, W> {
    schedule: ScheduleHandle,
    notices: Option<mpsc::Receiver<String>>,
    priorities: Vec<String>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(schedule: ScheduleHandle, input: R, output: W) -> Self {
        Self {
            schedule,
            notices: None,
            priorities: SUGGESTED_PRIORITIES.iter().map(|p| p.to_string()).collect(),
            input,
            output,
        }
    }

    /// Echo schedule change messages before each outcome line
    pub fn with_notifications(mut self) -> Self {
        let (tx, rx) = mpsc::channel();
        self.schedule.add_observer(forward_to(tx));
        self.notices = Some(rx);
        self
    }

    pub fn with_priorities(mut self, priorities: Vec<String>) -> Self {
        self.priorities = priorities;
        self
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(option) = self.prompt("Choose an option: ")? else {
                break;
            };

            let step = match option.trim() {
                "1" => self.add_task()?,
                "2" => self.remove_task()?,
                "3" => {
                    let view = self.schedule.view_tasks();
                    writeln!(self.output, "{}", view)?;
                    Step::Continue
                }
                "4" => {
                    writeln!(self.output, "Exiting the application...")?;
                    Step::Quit
                }
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Step::Continue
                }
            };

            if let Step::Quit = step {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn add_task(&mut self) -> Result<Step> {
        let priority_prompt = format!(
            "Enter priority level [{}]: ",
            self.priorities.join(", ")
        );

        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(Step::Quit);
        };
        let Some(start) = self.prompt("Enter start time (HH:MM): ")? else {
            return Ok(Step::Quit);
        };
        let Some(end) = self.prompt("Enter end time (HH:MM): ")? else {
            return Ok(Step::Quit);
        };
        let Some(priority) = self.prompt(&priority_prompt)? else {
            return Ok(Step::Quit);
        };

        let task = create_task(&description, &start, &end, &priority);
        let result = self.schedule.add_task(task);
        self.report(result)?;
        Ok(Step::Continue)
    }

    fn remove_task(&mut self) -> Result<Step> {
        let Some(description) = self.prompt("Enter task description to remove: ")? else {
            return Ok(Step::Quit);
        };

        let result = self.schedule.remove_task(&description);
        self.report(result)?;
        Ok(Step::Continue)
    }

    fn report(&mut self, result: std::result::Result<Outcome, ScheduleError>) -> Result<()> {
        self.flush_notices()?;
        match result {
            Ok(outcome) => writeln!(self.output, "{}", outcome)?,
            Err(e) if e.is_rejection() => writeln!(self.output, "{}", e)?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn flush_notices(&mut self) -> Result<()> {
        if let Some(rx) = &self.notices {
            for notice in rx.try_iter() {
                writeln!(self.output, "{}", notice)?;
            }
        }
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}

/// Start the interactive planner on stdin/stdout
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;

    let manager = ScheduleManager::new().with_time_format(config.time.time_format());
    let schedule = ScheduleHandle::new(manager);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(schedule, stdin.lock(), stdout.lock())
        .with_priorities(config.console.priorities);
    if config.notifications.enabled {
        console = console.with_notifications();
    }

    console.run()
}
