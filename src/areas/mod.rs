//! Core repository components
//!
//! - `database`: read access to the loose object database
//! - `repository`: repository paths and the output writer commands print to

pub mod database;
pub mod repository;
