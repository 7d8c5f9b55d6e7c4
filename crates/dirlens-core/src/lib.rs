//! DirLens Core — scanning, analysis, and data model.
//!
//! This crate contains all business logic with zero UI dependencies.
//! It is designed to be reusable across different frontends (GUI, CLI, TUI):
//! a frontend supplies a root path, receives the scanned [`model::Node`]
//! tree, and feeds it to the analysis passes.
//!
//! # Modules
//!
//! - [`model`] — Owned file tree, category table, and size formatting.
//! - [`scanner`] — Recursive filesystem scanning with progress reporting
//!   and a background-thread wrapper.
//! - [`analysis`] — Read-only reports over a completed tree (category
//!   statistics, largest files).

pub mod analysis;
pub mod model;
pub mod scanner;
