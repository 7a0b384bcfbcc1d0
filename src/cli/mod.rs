//! Command line interface for the Sherpa engine.
//!
//! Thin plumbing over the library: loads the JSON data files into
//! in-memory stores, runs one engine operation, and writes the changed
//! files back. Unparseable data files degrade to empty with a warning.

pub mod args;
pub mod commands;
pub mod output;
