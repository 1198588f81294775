//! tl toggle command implementation
//!
//! Flips the completion flag on one task. An id with no matching task
//! is a silent no-op, not an error.

use std::path::PathBuf;

use crate::error::Result;
use crate::events::{Event, EventKind};
use crate::output::{emit_success, OutputOptions};
use crate::render::{Renderer, TextRenderer, View};

use super::{emit_event, Session};

#[derive(serde::Serialize)]
struct ToggleReport {
    toggled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
    view: View,
}

pub struct ToggleOptions {
    pub id: u64,
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
    pub events: Option<String>,
}

pub fn run(opts: ToggleOptions) -> Result<()> {
    let mut session = Session::open(opts.store)?;

    let completed = match session.book.toggle(opts.id) {
        Some(completed) => completed,
        None => {
            // Unknown id: no mutation, no persist, no render
            tracing::debug!(id = opts.id, "toggle on unknown id ignored");
            return Ok(());
        }
    };

    session.save()?;
    emit_event(
        opts.events.as_deref(),
        Event::new(EventKind::TaskToggled)
            .with_data(serde_json::json!({"id": opts.id, "completed": completed}))?,
    )?;
    tracing::info!(id = opts.id, completed, "task toggled");

    let view = View::capture(&session.book);

    if opts.json {
        let report = ToggleReport {
            toggled: true,
            completed: Some(completed),
            view,
        };
        return emit_success(
            OutputOptions {
                json: true,
                quiet: opts.quiet,
            },
            "toggle",
            &report,
            None,
        );
    }

    if !opts.quiet {
        TextRenderer::stdout(session.config.display.clone()).render(&view)?;
    }

    Ok(())
}
