//! # rfscore-core
//!
//! A library for computing RF-Score close-contact features for
//! protein-ligand complexes.
//!
//! __rfscore-core__ provides functionality for:
//! * Loading protein structures (PDB) and ligand structures (SDF) into a
//!   flat [`AtomSet`] of coordinates and element types
//! * Counting close-contact atom pairs between a protein and a ligand,
//!   binned by element type, via [`CloseContacts`]
//! * Resolving the fixed PDBbind directory layout used by the
//!   feature-extraction batch tool
//!
//! The main entry point for callers is [`featurize`], which loads one
//! protein/ligand pair from disk and returns its feature vector.
//!
mod atoms;
mod dataset;
mod descriptor;
mod sdf;

pub use self::atoms::AtomSet;
pub use self::dataset::{apply_blacklist, ligand_path, protein_path, read_id_list};
pub use self::descriptor::{
    featurize, CloseContacts, RFSCORE_CUTOFF, RFSCORE_LIGAND_TYPES, RFSCORE_PROTEIN_TYPES,
};
