//! tl add command implementation
//!
//! Appends a task with a fresh id and renders the updated view.
//! Whitespace-only text is a silent no-op: nothing is persisted,
//! nothing is rendered, and the command still succeeds.

use std::path::PathBuf;

use crate::error::Result;
use crate::events::{Event, EventKind};
use crate::output::{emit_success, OutputOptions};
use crate::render::{Renderer, TextRenderer, View};
use crate::task::Task;

use super::{emit_event, Session};

#[derive(serde::Serialize)]
struct AddReport {
    added: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    task: Option<Task>,
    view: View,
}

pub struct AddOptions {
    pub text: String,
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
    pub events: Option<String>,
}

pub fn run(opts: AddOptions) -> Result<()> {
    let mut session = Session::open(opts.store)?;

    let added = session.book.add(&opts.text).cloned();

    if let Some(task) = &added {
        session.save()?;
        emit_event(
            opts.events.as_deref(),
            Event::new(EventKind::TaskAdded)
                .with_data(serde_json::json!({"id": task.id, "text": task.text}))?,
        )?;
        tracing::info!(id = task.id, "task added");
    } else {
        // Empty text: no mutation, no persist, no render
        return Ok(());
    }

    let view = View::capture(&session.book);

    if opts.json {
        let report = AddReport {
            added: true,
            task: added,
            view,
        };
        return emit_success(
            OutputOptions {
                json: true,
                quiet: opts.quiet,
            },
            "add",
            &report,
            None,
        );
    }

    if !opts.quiet {
        TextRenderer::stdout(session.config.display.clone()).render(&view)?;
    }

    Ok(())
}
