//! A minimal reader for Structure Data Format (SDF) files. These are common
//! molecular descriptions for ligands and a simpler format than PDB.
//!
//! Only what the contact descriptor needs is parsed: the V2000 counts line
//! and the atom block (coordinates plus element symbol). Bond lines and the
//! trailing data items are skipped.

use crate::AtomSet;
use anyhow::{anyhow, bail, Context, Result};
use pdbtbx::Element;

/// Parse the first molecule of an SDF file.
///
/// An SDF record has at least four lines before the atom block: a title,
/// two comment lines, and the counts line, e.g.
/// `"  3  1  0  0  0  0  0  0  0  0999 V2000"`.
pub(crate) fn parse_first_molecule(text: &str) -> Result<AtomSet> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 4 {
        bail!("not enough lines to parse an SDF header");
    }

    let counts_cols: Vec<&str> = lines[3].split_whitespace().collect();
    if counts_cols.len() < 2 {
        bail!("counts line doesn't have enough fields: {:?}", lines[3]);
    }
    let n_atoms: usize = counts_cols[0]
        .parse()
        .context("could not parse number of atoms")?;

    let first_atom_line = 4;
    let last_atom_line = first_atom_line + n_atoms;
    if lines.len() < last_atom_line {
        bail!(
            "not enough lines for the declared atom block: {} atoms expected",
            n_atoms
        );
    }

    let mut coords = Vec::with_capacity(n_atoms);
    let mut elements = Vec::with_capacity(n_atoms);
    for line in &lines[first_atom_line..last_atom_line] {
        let cols: Vec<&str> = line.split_whitespace().collect();
        if cols.len() < 4 {
            bail!("atom line does not have enough columns: {line:?}");
        }

        let x: f64 = cols[0].parse().context("could not parse X coordinate")?;
        let y: f64 = cols[1].parse().context("could not parse Y coordinate")?;
        let z: f64 = cols[2].parse().context("could not parse Z coordinate")?;
        let element = Element::try_from(cols[3].to_uppercase().as_str())
            .map_err(|_| anyhow!("unknown element symbol: {:?}", cols[3]))?;

        coords.push([x, y, z]);
        elements.push(element);
    }

    Ok(AtomSet::new(coords, elements))
}
