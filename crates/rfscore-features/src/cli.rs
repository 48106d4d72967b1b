use super::batch;
use clap::Parser;
use std::path::PathBuf;

/// Compute RF-Score features for protein-ligand complexes from the PDBbind
/// data set and save the results as a CSV table.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File containing the PDB codes of the complexes to use, one per line
    pdb_list_file: PathBuf,

    /// Top-level directory of the PDBbind data set
    pdbbind_dir: PathBuf,

    /// File to save the computed features to
    output_file: PathBuf,

    /// Optional file of PDB codes to skip; some structures are known to
    /// break structure parsers
    blacklist_file: Option<PathBuf>,

    /// Number of worker threads to use; 0 means all available cores
    #[arg(long, default_value_t = 0)]
    num_workers: usize,

    /// Print progress updates
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        };
        tracing_subscriber::fmt().with_max_level(level).init();

        batch::run(
            &self.pdb_list_file,
            &self.pdbbind_dir,
            &self.output_file,
            self.blacklist_file.as_deref(),
            self.num_workers,
        )
    }
}
