//! Git command implementations
//!
//! Only plumbing commands exist: low-level access to the object database that
//! scripts and higher-level commands are built from.

pub mod plumbing;
