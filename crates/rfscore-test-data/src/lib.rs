//! rfscore-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! The fixtures form a synthetic PDBbind complex (`1abc`) small enough that
//! its contact counts can be verified by hand.
//!
//! The test files are represented as `TestFile` objects which package the
//! raw bytes and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use rfscore_test_data::TestFile;
/// let (prot_file, _temp) = TestFile::protein_1abc().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Five-atom protein (GLY backbone, a far-away CYS sulfur) plus one
    /// water oxygen, in the PDBbind `<id>_protein.pdb` role.
    pub fn protein_1abc() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/1abc_protein.pdb"),
            suffix: "pdb",
        }
    }
    /// Three-atom ligand (C, N, and a distant O) paired with
    /// [`TestFile::protein_1abc`].
    pub fn ligand_1abc() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/1abc_ligand.sdf"),
            suffix: "sdf",
        }
    }

    /// Raw file contents, for tests that lay the fixture out in a PDBbind
    /// style directory tree instead of a lone temp file.
    pub fn bytes(&self) -> &'static [u8] {
        self.filebinary
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
