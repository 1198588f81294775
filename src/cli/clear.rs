//! tl clear command implementation
//!
//! Removes every completed task, keeping the remainder in order.
//! Running it again is a no-op: nothing left to remove means nothing is
//! persisted.

use std::path::PathBuf;

use crate::error::Result;
use crate::events::{Event, EventKind};
use crate::output::{emit_success, OutputOptions};
use crate::render::{Renderer, TextRenderer, View};

use super::{emit_event, Session};

#[derive(serde::Serialize)]
struct ClearReport {
    removed: usize,
    view: View,
}

pub struct ClearOptions {
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
    pub events: Option<String>,
}

pub fn run(opts: ClearOptions) -> Result<()> {
    let mut session = Session::open(opts.store)?;

    let removed = session.book.clear_completed();

    if removed > 0 {
        session.save()?;
        emit_event(
            opts.events.as_deref(),
            Event::new(EventKind::CompletedCleared)
                .with_data(serde_json::json!({"removed": removed}))?,
        )?;
        tracing::info!(removed, "completed tasks cleared");
    }

    let view = View::capture(&session.book);

    if opts.json {
        let report = ClearReport { removed, view };
        return emit_success(
            OutputOptions {
                json: true,
                quiet: opts.quiet,
            },
            "clear",
            &report,
            None,
        );
    }

    if !opts.quiet {
        TextRenderer::stdout(session.config.display.clone()).render(&view)?;
    }

    Ok(())
}
