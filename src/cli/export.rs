use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use omemeta::export::write_tsv;

use super::info::load_snapshot;

/// Export a snapshot as TSV, to a file or stdout
pub fn run(file: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let meta = load_snapshot(&file)?;

    let rows = match &output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(out);
            let rows = write_tsv(&meta, &mut writer).context("Failed to write TSV")?;
            writer.flush()?;
            rows
        }
        None => {
            let stdout = std::io::stdout();
            write_tsv(&meta, stdout.lock()).context("Failed to write TSV")?
        }
    };

    info!("Exported {} rows from {}", rows, file.display());
    Ok(())
}
