//! Git data structures
//!
//! - `objects`: object IDs, headers and the loose object decoder

pub mod objects;
