//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `template` - Literal tag substitution

pub mod io;
pub mod template;
