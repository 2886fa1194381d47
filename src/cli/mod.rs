use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod demo;
mod export;
mod info;
mod sanitize;
mod set;
mod validate;

mod config;

pub use config::Config;

/// omemeta - Typed OME-XML metadata toolkit
#[derive(Parser)]
#[command(name = "omemeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a demo metadata snapshot
    Demo {
        /// Output snapshot path
        #[arg(value_name = "OUTPUT", default_value = "demo.ome.json")]
        output: PathBuf,

        /// Number of images (default: 1)
        #[arg(short = 'i', long)]
        images: Option<usize>,

        /// Number of channels per image (default: 2)
        #[arg(short = 'c', long)]
        channels: Option<usize>,

        /// Store free text verbatim instead of sanitizing it
        #[arg(long)]
        no_filter: bool,
    },

    /// Display information about a metadata snapshot
    Info {
        /// Input snapshot path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Validate snapshot integrity and completeness
    Validate {
        /// Input snapshot path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Export a snapshot as tab-separated values
    Export {
        /// Input snapshot path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output TSV path (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Strip control characters from every free-text value of a snapshot
    Sanitize {
        /// Input snapshot path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output snapshot path (defaults to rewriting the input)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Set a single property value, e.g. `set meta.json ChannelName 0:1 GFP`
    Set {
        /// Snapshot to update (created if missing)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Property name, e.g. ChannelName
        #[arg(value_name = "PROPERTY")]
        property: String,

        /// Colon-separated index path, e.g. 0:1 (empty for document-level properties)
        #[arg(value_name = "PATH")]
        path: String,

        /// Value in its text form
        #[arg(value_name = "VALUE")]
        value: String,

        /// Store free text verbatim instead of sanitizing it
        #[arg(long)]
        no_filter: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Demo {
            output,
            images,
            channels,
            no_filter,
        } => demo::run(output, &config, images, channels, no_filter),
        Commands::Info { file } => info::run(file),
        Commands::Validate { file } => validate::run(file),
        Commands::Export { file, output } => export::run(file, output),
        Commands::Sanitize { file, output } => sanitize::run(file, output),
        Commands::Set {
            file,
            property,
            path,
            value,
            no_filter,
        } => set::run(file, property, path, value, config.filter_enabled(no_filter)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set() {
        let cli = Cli::try_parse_from([
            "omemeta", "-vv", "set", "meta.json", "ChannelName", "0:1", "GFP", "--no-filter",
        ])
        .unwrap();
        assert_eq!(cli.verbosity(), 2);
        let Commands::Set { property, path, no_filter, .. } = cli.command else {
            panic!("expected set");
        };
        assert_eq!(property, "ChannelName");
        assert_eq!(path, "0:1");
        assert!(no_filter);
    }

    #[test]
    fn test_demo_metadata_is_valid() {
        use omemeta::prelude::*;
        use omemeta::tools::ensure_valid;
        use omemeta::validator::validate_metadata;

        let mut meta = FilterMetadata::new(OmeMetadata::new(), true);
        demo::build_demo_metadata(&mut meta, 2, 3, true).unwrap();
        ensure_valid(&mut meta).unwrap();

        assert_eq!(
            meta.experimenter_institution(0).as_deref(),
            Some("Imaging Core Facility")
        );
        assert_eq!(meta.rectangle_text(1, 0).as_deref(), Some("nucleus[0m"));
        assert_eq!(meta.plane_count(1), Some(45));

        let report = validate_metadata(&meta, "demo").unwrap();
        assert!(!report.has_failures(), "{}", report);
    }
}
