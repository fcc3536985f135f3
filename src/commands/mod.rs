//! Command implementations
//!
//! - `diff`: Compare two files and print the edit script
//!
//! Commands are methods on `Session`, writing through its writer.

pub mod diff;
