//! tl ls command implementation
//!
//! Selects a filter and renders the view. Pure read path: the filter is
//! transient UI state, so nothing is persisted and every fresh
//! invocation starts back at `all`.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::render::{Renderer, TextRenderer, View};
use crate::task::Filter;

use super::Session;

pub struct ListOptions {
    pub filter: String,
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: ListOptions) -> Result<()> {
    let filter: Filter = opts.filter.parse()?;

    let mut session = Session::open(opts.store)?;
    session.book.set_filter(filter);

    let view = View::capture(&session.book);

    if opts.json {
        return emit_success(
            OutputOptions {
                json: true,
                quiet: opts.quiet,
            },
            "ls",
            &view,
            None,
        );
    }

    if !opts.quiet {
        TextRenderer::stdout(session.config.display.clone()).render(&view)?;
    }

    Ok(())
}
