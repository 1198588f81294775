//! Command-line interface for tl
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule. Every invocation is
//! one inbound event: load the store, apply at most one mutation,
//! persist the full list, then hand the derived view to the renderer.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::events::{Event, EventDestination};
use crate::storage::Store;
use crate::task::TaskBook;

mod add;
mod clear;
mod list;
mod stats;
mod toggle;

/// tl - Task List
///
/// A local task tracker: add items, toggle completion, filter by
/// status, clear completed items, and see aggregate counts.
#[derive(Parser, Debug)]
#[command(name = "tl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file (defaults to the platform data directory)
    #[arg(long, global = true, env = "TL_STORE")]
    pub store: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit mutation events as JSON lines ("-" for stdout, or a file path)
    #[arg(long, global = true)]
    pub events: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task text (trimmed; whitespace-only input is silently ignored)
        text: String,
    },

    /// Toggle a task's completion flag
    Toggle {
        /// Task id (unknown ids are silently ignored)
        id: u64,
    },

    /// List tasks under a filter
    Ls {
        /// Filter: all, active, or completed
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Remove every completed task
    Clear,

    /// Show counts and the completion rate
    Stats,
}

/// One loaded invocation: config, store handle, and the task book.
pub(crate) struct Session {
    pub config: Config,
    pub store: Store,
    pub book: TaskBook,
}

impl Session {
    /// Load config, resolve the store, and populate the book. A missing
    /// or malformed store degrades to an empty list.
    pub fn open(store_override: Option<PathBuf>) -> Result<Self> {
        let config = Config::load()?;
        let store = Store::resolve(store_override, &config)?;
        let book = TaskBook::from_tasks(store.load());
        Ok(Self {
            config,
            store,
            book,
        })
    }

    /// Persist the canonical list. Called after every mutation, before
    /// the render step.
    pub fn save(&self) -> Result<()> {
        self.store.save(self.book.tasks())
    }
}

/// Emit a mutation event if an event destination was configured.
pub(crate) fn emit_event(destination: Option<&str>, event: Event) -> Result<()> {
    if let Some(destination) = EventDestination::parse(destination) {
        destination.open()?.emit(&event)?;
    }
    Ok(())
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add { text } => add::run(add::AddOptions {
                text,
                store: self.store,
                json: self.json,
                quiet: self.quiet,
                events: self.events,
            }),
            Commands::Toggle { id } => toggle::run(toggle::ToggleOptions {
                id,
                store: self.store,
                json: self.json,
                quiet: self.quiet,
                events: self.events,
            }),
            Commands::Ls { filter } => list::run(list::ListOptions {
                filter,
                store: self.store,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Clear => clear::run(clear::ClearOptions {
                store: self.store,
                json: self.json,
                quiet: self.quiet,
                events: self.events,
            }),
            Commands::Stats => stats::run(stats::StatsOptions {
                store: self.store,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
