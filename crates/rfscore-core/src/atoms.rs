use crate::sdf;
use anyhow::{anyhow, Context, Result};
use itertools::izip;
use pdbtbx::{Element, PDB};
use std::fs;
use std::path::Path;

/// AtomSet
///
/// Flat per-atom data for one structure: coordinates and element types.
/// This is all the close-contact descriptor needs, so chain and residue
/// information is not carried along.
pub struct AtomSet {
    coords: Vec<[f64; 3]>,
    elements: Vec<Element>,
}

impl AtomSet {
    pub fn new(coords: Vec<[f64; 3]>, elements: Vec<Element>) -> Self {
        AtomSet { coords, elements }
    }
    pub fn size(&self) -> usize {
        self.coords.len()
    }
    pub fn iter_coords_and_elements(&self) -> impl Iterator<Item = (&[f64; 3], &Element)> {
        izip!(&self.coords, &self.elements)
    }
    /// Load a protein structure from a `.pdb` file.
    ///
    /// Every atom that reports an element is kept, HETATM records included;
    /// waters and cofactors present in PDBbind protein files take part in
    /// the contact counts.
    pub fn from_pdb_file(path: &Path) -> Result<Self> {
        let filename = path
            .to_str()
            .ok_or_else(|| anyhow!("non-UTF8 path: {}", path.display()))?;
        let (pdb, _errors) = pdbtbx::open(filename)
            .map_err(|errors| anyhow!("failed to parse {}: {errors:?}", path.display()))?;
        Ok(Self::from(&pdb))
    }
    /// Load a ligand structure from an `.sdf` file.
    ///
    /// Only the first molecule of the file is read.
    pub fn from_sdf_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        sdf::parse_first_molecule(&text)
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}

impl From<&PDB> for AtomSet {
    // Atoms without a parseable element symbol are dropped; they cannot be
    // binned by element type anyway.
    fn from(pdb: &PDB) -> Self {
        let (coords, elements): (Vec<[f64; 3]>, Vec<Element>) = pdb
            .atoms()
            .filter_map(|atom| {
                atom.element().map(|element| {
                    let (x, y, z) = atom.pos();
                    ([x, y, z], *element)
                })
            })
            .unzip();

        AtomSet { coords, elements }
    }
}
