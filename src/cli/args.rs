//! Command-line argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use wiredolphin_core::VerbosityMode;

use crate::capture::Source;

/// Output verbosity, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Hex dump of each frame
    Raw,
    /// One line per frame
    Concise,
    /// One line per protocol layer
    Synthetic,
    /// Every header field and the full payload
    Complete,
}

impl From<Mode> for VerbosityMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Raw => VerbosityMode::Raw,
            Mode::Concise => VerbosityMode::Concise,
            Mode::Synthetic => VerbosityMode::Synthetic,
            Mode::Complete => VerbosityMode::Complete,
        }
    }
}

/// Dissect captured network frames and print their protocol headers.
#[derive(Parser, Debug)]
#[command(name = "wiredolphin")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Capture live on this interface (needs the `live` feature)
    #[arg(short = 'i', long = "interface", value_name = "NAME", conflicts_with = "offline")]
    pub interface: Option<String>,

    /// Read frames from a pcap or pcapng file (gzip allowed)
    #[arg(short = 'o', long = "offline", value_name = "FILE")]
    pub offline: Option<PathBuf>,

    /// BPF filter expression, compiled by libpcap
    #[arg(short = 'f', long = "filter", value_name = "EXPR")]
    pub filter: Option<String>,

    /// Output verbosity
    #[arg(short = 'm', long = "mode", value_enum, default_value = "complete")]
    pub mode: Mode,

    /// Output verbosity as a number: 0 raw, 1 concise, 2 synthetic, 3+ complete
    #[arg(long = "level", value_name = "N", conflicts_with = "mode")]
    pub level: Option<u8>,

    /// Stop after this many frames
    #[arg(short = 'c', long = "count", value_name = "N")]
    pub count: Option<u64>,

    /// List the interfaces libpcap can open
    #[arg(long = "list-interfaces")]
    pub list_interfaces: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The frame source selected by `--interface` or `--offline`.
    pub fn source(&self) -> Option<Source> {
        match (&self.interface, &self.offline) {
            (Some(name), _) => Some(Source::Interface(name.clone())),
            (None, Some(path)) => Some(Source::Offline(path.clone())),
            (None, None) => None,
        }
    }

    /// The rendering mode, with `--level` taking precedence.
    pub fn verbosity(&self) -> VerbosityMode {
        self.level
            .map(VerbosityMode::from_level)
            .unwrap_or_else(|| self.mode.into())
    }

    /// Log filter directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
