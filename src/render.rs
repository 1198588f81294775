//! Derived-view snapshot and renderer contract.
//!
//! A `View` is a point-in-time projection of the task book: the tasks
//! visible under the current filter, the aggregate stats, and the
//! filter itself. Renderers consume views; they never see the live
//! collection, so nothing downstream can mutate the canonical list.

use std::io::Write;

use serde::Serialize;

use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::task::{Filter, Stats, Task, TaskBook};

/// Snapshot handed to renderers after every mutation.
#[derive(Debug, Clone, Serialize)]
pub struct View {
    /// Tasks visible under `filter`, in insertion order
    pub tasks: Vec<Task>,
    pub stats: Stats,
    pub filter: Filter,
}

impl View {
    /// Capture the current state of a task book.
    pub fn capture(book: &TaskBook) -> Self {
        Self {
            tasks: book.filtered().into_iter().cloned().collect(),
            stats: book.stats(),
            filter: book.current_filter(),
        }
    }
}

/// Anything that can display a view.
pub trait Renderer {
    fn render(&mut self, view: &View) -> Result<()>;
}

/// Plain-text renderer: one row per task with a completion marker,
/// a counts line, the completion rate, and the active filter control.
pub struct TextRenderer<W: Write> {
    writer: W,
    display: DisplayConfig,
}

impl TextRenderer<std::io::Stdout> {
    pub fn stdout(display: DisplayConfig) -> Self {
        Self::new(std::io::stdout(), display)
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W, display: DisplayConfig) -> Self {
        Self { writer, display }
    }

    fn lines(&self, view: &View) -> Vec<String> {
        let mut lines = Vec::new();

        if view.tasks.is_empty() {
            lines.push(match view.filter {
                Filter::All => "No tasks.".to_string(),
                Filter::Active => "No active tasks.".to_string(),
                Filter::Completed => "No completed tasks.".to_string(),
            });
        } else {
            for task in &view.tasks {
                let marker = if task.completed {
                    &self.display.done_marker
                } else {
                    &self.display.todo_marker
                };
                lines.push(format!("[{}] #{} {}", marker, task.id, task.text));
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "{} total, {} active, {} done ({}% complete)",
            view.stats.total, view.stats.active, view.stats.done, view.stats.completion_rate
        ));
        lines.push(format!("filter: {}", filter_controls(view.filter)));

        lines
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &View) -> Result<()> {
        let text = self.lines(view).join("\n");
        writeln!(self.writer, "{}", text).map_err(Error::Io)?;
        Ok(())
    }
}

/// Render the filter controls with the active one marked, e.g.
/// `all  [active]  completed`.
fn filter_controls(current: Filter) -> String {
    Filter::ALL_FILTERS
        .iter()
        .map(|f| {
            if *f == current {
                format!("[{}]", f)
            } else {
                f.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> TaskBook {
        let mut book = TaskBook::new();
        let a = book.add("buy milk").expect("task added").id;
        book.add("walk dog");
        book.toggle(a);
        book
    }

    fn rendered(view: &View) -> String {
        let mut buf = Vec::new();
        TextRenderer::new(&mut buf, DisplayConfig::default())
            .render(view)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn view_captures_filtered_snapshot() {
        let mut book = sample_book();
        book.set_filter(Filter::Completed);

        let view = View::capture(&book);
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.tasks[0].text, "buy milk");
        assert_eq!(view.stats.total, 2);
        assert_eq!(view.filter, Filter::Completed);
    }

    #[test]
    fn rows_carry_completion_markers_and_ids() {
        let book = sample_book();
        let output = rendered(&View::capture(&book));

        assert!(output.contains("[x] #1 buy milk"));
        assert!(output.contains("[ ] #2 walk dog"));
    }

    #[test]
    fn stats_line_shows_counts_and_rate() {
        let book = sample_book();
        let output = rendered(&View::capture(&book));
        assert!(output.contains("2 total, 1 active, 1 done (50% complete)"));
    }

    #[test]
    fn active_filter_control_is_marked() {
        let mut book = sample_book();
        book.set_filter(Filter::Active);
        let output = rendered(&View::capture(&book));
        assert!(output.contains("filter: all  [active]  completed"));
    }

    #[test]
    fn empty_views_render_a_placeholder() {
        let book = TaskBook::new();
        let output = rendered(&View::capture(&book));
        assert!(output.contains("No tasks."));
        assert!(output.contains("0 total, 0 active, 0 done (0% complete)"));
    }

    #[test]
    fn custom_markers_are_honored() {
        let book = sample_book();
        let view = View::capture(&book);

        let mut buf = Vec::new();
        let display = DisplayConfig {
            done_marker: "✔".to_string(),
            todo_marker: "·".to_string(),
        };
        TextRenderer::new(&mut buf, display).render(&view).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("[✔] #1 buy milk"));
        assert!(output.contains("[·] #2 walk dog"));
    }
}
