//! Analysis passes — read-only reports over a completed scan tree.
//!
//! Both passes only borrow the tree, so they may run in any order, or not
//! at all.

pub mod categories;
pub mod top_files;

pub use categories::{analyse_categories, CategoryStats};
pub use top_files::{largest_files, DEFAULT_LIMIT};
