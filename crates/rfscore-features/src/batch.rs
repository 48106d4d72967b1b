//! The batch driver: a parallel map of the per-complex feature computation
//! over a list of PDB codes, collected into one CSV table.

use anyhow::{Context, Result};
use polars::prelude::*;
use rayon::prelude::*;
use rfscore_core::{
    apply_blacklist, featurize, ligand_path, protein_path, read_id_list, CloseContacts,
};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Run the whole batch: read the id list, filter it, featurize every
/// complex on a worker pool, and write the feature table.
///
/// A failure in any single complex aborts the batch; there is no per-item
/// retry or partial output.
pub fn run(
    pdb_list_file: &Path,
    pdbbind_dir: &Path,
    output_file: &Path,
    blacklist_file: Option<&Path>,
    num_workers: usize,
) -> Result<()> {
    let mut pdbs = read_id_list(pdb_list_file)?;

    // drop any blacklisted PDB codes
    if let Some(blacklist_file) = blacklist_file {
        let blacklist = read_id_list(blacklist_file)?;
        let before = pdbs.len();
        pdbs = apply_blacklist(pdbs, &blacklist);
        info!(skipped = before - pdbs.len(), "dropped blacklisted PDB codes");
    }
    info!(complexes = pdbs.len(), "computing RF-Score features");

    // num_threads(0) lets rayon pick one thread per available core
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_workers)
        .build()
        .context("failed to build worker pool")?;
    let rows: Vec<Vec<u32>> = pool.install(|| {
        pdbs.par_iter()
            .map(|pdb| {
                let features = featurize(
                    &protein_path(pdbbind_dir, pdb),
                    &ligand_path(pdbbind_dir, pdb),
                )
                .with_context(|| format!("failed to featurize complex {pdb}"))?;
                info!(%pdb, "featurized complex");
                Ok(features)
            })
            .collect::<Result<_>>()
    })?;

    let mut features = features_to_df(&pdbs, &rows)?;
    let mut file = File::create(output_file)
        .with_context(|| format!("failed to create {}", output_file.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut features)
        .context("failed to write feature table")?;
    info!(
        output = %output_file.display(),
        rows = features.height(),
        "wrote feature table"
    );
    Ok(())
}

/// One row per PDB code: the id column first, then the fixed feature
/// columns in descriptor order.
fn features_to_df(pdbs: &[String], rows: &[Vec<u32>]) -> Result<DataFrame> {
    let titles = CloseContacts::rfscore().titles();
    let mut columns = Vec::with_capacity(titles.len() + 1);
    columns.push(Column::new("pdb".into(), pdbs.to_vec()));
    for (index, title) in titles.iter().enumerate() {
        let values: Vec<u32> = rows.iter().map(|row| row[index]).collect();
        columns.push(Column::new(title.as_str().into(), values));
    }
    DataFrame::new(columns).context("failed to assemble feature table")
}
