//! Scoped timing for generation tasks.

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use tracing::info;

const CLOCK_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Logs when a task starts and, on drop, when it ends and how long it took.
///
/// The end entry is written whether the task finished or bailed out early
/// with an error.
pub struct TaskTimer {
    task: String,
    started_at: DateTime<Local>,
    start: Instant,
}

impl TaskTimer {
    /// Start timing `task`.
    pub fn start(task: impl Into<String>) -> Self {
        let task = task.into();
        let started_at = Local::now();
        info!("Now runs: {}", task);
        info!("{}: started at {}", task, started_at.format(CLOCK_FORMAT));
        Self {
            task,
            started_at,
            start: Instant::now(),
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for TaskTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        info!("{}: ended at {}", self.task, Local::now().format(CLOCK_FORMAT));
        info!("{}: duration {:?}", self.task, elapsed);
    }
}
