//! Task model and the `TaskBook` manager.
//!
//! `TaskBook` owns the in-memory task sequence and the current filter,
//! applies the four mutating operations (add, toggle, clear completed,
//! set filter), and computes the derived views handed to renderers.
//! Persistence and rendering live behind the `storage` and `render`
//! modules; the book itself never touches the disk.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One task in the list.
///
/// This is also the persisted shape: the store file is a JSON array of
/// exactly these objects, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, monotonically increasing in creation order
    pub id: u64,
    /// Trimmed, never-empty task text
    pub text: String,
    /// Completion flag
    pub completed: bool,
}

/// The currently selected view over the task list.
///
/// Transient UI state: never persisted, resets to `All` on every fresh
/// initialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// All filter values, in display order for the filter controls.
    pub const ALL_FILTERS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];
}

impl std::str::FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            _ => Err(Error::InvalidArgument(format!(
                "invalid filter '{}': must be all, active, or completed",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived counts, recomputed from the full list on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub done: usize,
    /// Percentage of completed tasks, rounded to the nearest integer.
    /// 0 when the list is empty.
    pub completion_rate: u32,
}

/// In-memory task list manager.
///
/// Owns the canonical sequence exclusively; collaborators only ever see
/// snapshots or borrowed views.
#[derive(Debug, Default)]
pub struct TaskBook {
    tasks: Vec<Task>,
    current_filter: Filter,
    next_id: u64,
}

impl TaskBook {
    /// Create an empty book with the filter at `all`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize from a previously persisted sequence.
    ///
    /// The id counter seeds past the highest loaded id, so ids stay
    /// unique across reloads regardless of timing.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            tasks,
            current_filter: Filter::All,
            next_id,
        }
    }

    /// The full sequence, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn current_filter(&self) -> Filter {
        self.current_filter
    }

    /// Add a task from raw user text.
    ///
    /// The text is trimmed first; if nothing remains the call is a
    /// silent no-op and `None` is returned. Otherwise the new task is
    /// appended and returned.
    pub fn add(&mut self, raw_text: &str) -> Option<&Task> {
        let text = raw_text.trim();
        if text.is_empty() {
            tracing::debug!("rejecting empty task text");
            return None;
        }

        self.next_id += 1;
        self.tasks.push(Task {
            id: self.next_id,
            text: text.to_string(),
            completed: false,
        });
        self.tasks.last()
    }

    /// Flip the completion flag on the task with the given id.
    ///
    /// Returns the new completion state, or `None` if no such task
    /// exists (a silent no-op, not an error).
    pub fn toggle(&mut self, id: u64) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Set the current filter. Transient; callers do not persist this.
    pub fn set_filter(&mut self, filter: Filter) {
        self.current_filter = filter;
    }

    /// Remove every completed task, preserving the relative order of
    /// the remainder. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    /// Tasks visible under the current filter, in insertion order.
    pub fn filtered(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| match self.current_filter {
                Filter::All => true,
                Filter::Active => !t.completed,
                Filter::Completed => t.completed,
            })
            .collect()
    }

    /// Derived counts over the full list (not the filtered view).
    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let active = self.tasks.iter().filter(|t| !t.completed).count();
        let done = total - active;
        let completion_rate = if total == 0 {
            0
        } else {
            (done as f64 / total as f64 * 100.0).round() as u32
        };
        Stats {
            total,
            active,
            done,
            completion_rate,
        }
    }
}
