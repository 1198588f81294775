//! tl - Task List Library
//!
//! This library provides the core functionality for the tl CLI tool,
//! a local task tracker with filters and persistent storage.
//!
//! # Core Concepts
//!
//! - **Tasks**: Short text items with a unique id and a completion flag
//! - **Filters**: Transient views over the list (`all`, `active`, `completed`)
//! - **Stats**: Derived counts and a completion rate, recomputed per render
//! - **Store**: A single JSON blob persisted after every mutation
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `config.toml`
//! - `error`: Error types and result aliases
//! - `task`: Task model, filters, and the `TaskBook` manager
//! - `storage`: Store path resolution and atomic persistence
//! - `render`: Derived-view snapshot and renderer contract
//! - `events`: Structured JSONL event output
//! - `output`: Shared human/JSON output formatting

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod render;
pub mod storage;
pub mod task;

pub use error::{Error, Result};
