//! Command-line interface module.
//!
//! Argument parsing via clap. The parsed [`Args`] select a frame source,
//! an optional BPF filter and the verbosity mode.

mod args;

pub use args::{Args, Mode};
