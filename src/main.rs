//! # omemeta
//!
//! Command-line tool for inspecting and editing OME metadata snapshots.
//!
//! ## Usage
//!
//! ```bash
//! # Generate a demo snapshot
//! omemeta demo demo.ome.json --images 2
//!
//! # Inspect, validate and export it
//! omemeta info demo.ome.json
//! omemeta validate demo.ome.json
//! omemeta export demo.ome.json -o demo.tsv
//!
//! # Edit a value
//! omemeta set demo.ome.json ChannelName 0:1 GFP
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
