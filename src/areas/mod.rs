//! Command environment
//!
//! - `session`: Output writer, diff strategy and options shared by commands
//! - `workspace`: Reading and tokenising the files being compared

pub mod session;
pub mod workspace;
