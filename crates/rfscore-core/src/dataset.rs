//! Helpers for the fixed PDBbind directory layout.
//!
//! Each complex lives in its own directory named after its PDB code, with
//! the protein as `<id>_protein.pdb` and the ligand as `<id>_ligand.sdf`.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a list of PDB codes, one per line. Lines are trimmed and empty
/// lines are skipped.
pub fn read_id_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read id list {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Drop any id present in `blacklist`, preserving the order of the rest.
pub fn apply_blacklist(ids: Vec<String>, blacklist: &[String]) -> Vec<String> {
    let skip: HashSet<&str> = blacklist.iter().map(String::as_str).collect();
    ids.into_iter()
        .filter(|id| !skip.contains(id.as_str()))
        .collect()
}

/// `<root>/<id>/<id>_protein.pdb`
pub fn protein_path(root: &Path, id: &str) -> PathBuf {
    root.join(id).join(format!("{id}_protein.pdb"))
}

/// `<root>/<id>/<id>_ligand.sdf`
pub fn ligand_path(root: &Path, id: &str) -> PathBuf {
    root.join(id).join(format!("{id}_ligand.sdf"))
}
