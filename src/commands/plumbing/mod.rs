//! Plumbing commands (low-level Git operations)
//!
//! ## Commands
//!
//! - `cat-file`: Print the content, type or size of an object

pub mod cat_file;
