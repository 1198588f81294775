//! tl stats command implementation
//!
//! Read-only view of the derived counts: total, active, done, and the
//! completion rate.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

use super::Session;

pub struct StatsOptions {
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(opts: StatsOptions) -> Result<()> {
    let session = Session::open(opts.store)?;
    let stats = session.book.stats();

    let mut human = HumanOutput::new("tl stats");
    human.push_summary("total", stats.total.to_string());
    human.push_summary("active", stats.active.to_string());
    human.push_summary("done", stats.done.to_string());
    human.push_summary("rate", format!("{}%", stats.completion_rate));

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "stats",
        &stats,
        Some(&human),
    )
}
