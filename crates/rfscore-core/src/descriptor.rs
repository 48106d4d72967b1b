use crate::AtomSet;
use anyhow::Result;
use itertools::Itertools;
use pdbtbx::Element;
use std::path::Path;
use tracing::debug;

/// Distance cutoff in Ångström for the RF-Score contact counts.
pub const RFSCORE_CUTOFF: f64 = 12.0;

/// Ligand element types counted by RF-Score.
pub const RFSCORE_LIGAND_TYPES: [Element; 9] = [
    Element::C,
    Element::N,
    Element::O,
    Element::F,
    Element::P,
    Element::S,
    Element::Cl,
    Element::Br,
    Element::I,
];

/// Protein element types counted by RF-Score.
pub const RFSCORE_PROTEIN_TYPES: [Element; 4] =
    [Element::C, Element::N, Element::O, Element::S];

/// CloseContacts
///
/// A close-contact descriptor: counts protein-ligand atom pairs closer than
/// a cutoff distance, binned by the (ligand element, protein element) pair.
/// Atoms whose element is outside the configured type sets contribute
/// nothing, which is also what keeps hydrogens out of the counts.
pub struct CloseContacts {
    cutoff: f64,
    ligand_types: Vec<Element>,
    protein_types: Vec<Element>,
}

impl CloseContacts {
    pub fn new(cutoff: f64, ligand_types: Vec<Element>, protein_types: Vec<Element>) -> Self {
        CloseContacts {
            cutoff,
            ligand_types,
            protein_types,
        }
    }

    /// The fixed RF-Score configuration: cutoff 12 Å, nine ligand element
    /// types and four protein element types.
    pub fn rfscore() -> Self {
        Self::new(
            RFSCORE_CUTOFF,
            RFSCORE_LIGAND_TYPES.to_vec(),
            RFSCORE_PROTEIN_TYPES.to_vec(),
        )
    }

    /// Feature names, one per (ligand type, protein type) pair in
    /// ligand-major order: `"6.6"`, `"6.7"`, ... `"53.16"`.
    pub fn titles(&self) -> Vec<String> {
        self.ligand_types
            .iter()
            .cartesian_product(self.protein_types.iter())
            .map(|(lig, prot)| format!("{}.{}", lig.atomic_number(), prot.atomic_number()))
            .collect()
    }

    /// Count the contact pairs between `protein` and `ligand`.
    ///
    /// The result is aligned with [`CloseContacts::titles`]. Pairs are
    /// counted when their distance is strictly below the cutoff.
    pub fn build(&self, protein: &AtomSet, ligand: &AtomSet) -> Vec<u32> {
        let n_prot = self.protein_types.len();
        let cutoff_sq = self.cutoff * self.cutoff;
        let mut counts = vec![0u32; self.ligand_types.len() * n_prot];

        for (lig_coord, lig_element) in ligand.iter_coords_and_elements() {
            let Some(i) = self.ligand_types.iter().position(|t| t == lig_element) else {
                continue;
            };
            for (prot_coord, prot_element) in protein.iter_coords_and_elements() {
                let Some(j) = self.protein_types.iter().position(|t| t == prot_element)
                else {
                    continue;
                };
                let dist_sq = lig_coord
                    .iter()
                    .zip(prot_coord)
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f64>();
                if dist_sq < cutoff_sq {
                    counts[i * n_prot + j] += 1;
                }
            }
        }
        counts
    }
}

/// Compute the RF-Score feature vector for one protein-ligand complex.
///
/// This is the per-complex unit of work of the batch tool: load the protein
/// from `protein_file`, the ligand from `ligand_file`, and count contacts
/// with the fixed RF-Score configuration.
pub fn featurize(protein_file: &Path, ligand_file: &Path) -> Result<Vec<u32>> {
    let protein = AtomSet::from_pdb_file(protein_file)?;
    let ligand = AtomSet::from_sdf_file(ligand_file)?;
    debug!(
        protein = %protein_file.display(),
        protein_atoms = protein.size(),
        ligand_atoms = ligand.size(),
        "loaded complex"
    );
    Ok(CloseContacts::rfscore().build(&protein, &ligand))
}
