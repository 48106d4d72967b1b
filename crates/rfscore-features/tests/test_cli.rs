use assert_cmd::Command;
use rfscore_test_data::TestFile;
use std::fs;
use std::path::Path;

// the 1abc fixture: ligand C and N each see CA, C, N and O of the GLY
// residue inside the 12 A cutoff, everything else is out of range
const EXPECTED_1ABC: &str =
    "1abc,2,1,1,0,2,1,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0";

/// Lay out `<root>/<id>/<id>_protein.pdb` and `<id>_ligand.sdf` for one
/// fixture complex.
fn write_complex(root: &Path, id: &str) {
    let dir = root.join(id);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(format!("{id}_protein.pdb")),
        TestFile::protein_1abc().bytes(),
    )
    .unwrap();
    fs::write(
        dir.join(format!("{id}_ligand.sdf")),
        TestFile::ligand_1abc().bytes(),
    )
    .unwrap();
}

fn run_batch(root: &Path, list: &str, blacklist: Option<&str>, num_workers: &str) -> String {
    let list_file = root.join("pdbs.txt");
    fs::write(&list_file, list).unwrap();
    let output_file = root.join("features.csv");

    let mut cmd = Command::cargo_bin("rfscore-features").unwrap();
    cmd.arg(&list_file).arg(root).arg(&output_file);
    if let Some(blacklist) = blacklist {
        let blacklist_file = root.join("blacklist.txt");
        fs::write(&blacklist_file, blacklist).unwrap();
        cmd.arg(&blacklist_file);
    }
    cmd.arg("--num-workers").arg(num_workers);
    cmd.assert().success();

    fs::read_to_string(&output_file).unwrap()
}

#[test]
fn test_cli_featurize_fixture() {
    let root = tempfile::tempdir().unwrap();
    write_complex(root.path(), "1abc");

    let table = run_batch(root.path(), "1abc\n", None, "1");
    let mut lines = table.lines();

    let header = lines.next().unwrap();
    assert!(header.starts_with("pdb,6.6,6.7,6.8,6.16,7.6"));
    assert!(header.ends_with("53.6,53.7,53.8,53.16"));
    assert_eq!(header.split(',').count(), 37);

    assert_eq!(lines.next().unwrap(), EXPECTED_1ABC);
    assert_eq!(lines.next(), None);
}

#[test]
fn test_cli_preserves_input_order_and_blacklist() {
    let root = tempfile::tempdir().unwrap();
    for id in ["2xyz", "1abc", "3def"] {
        write_complex(root.path(), id);
    }

    // 3def is blacklisted and must not show up; 9zzz only exists in the
    // blacklist and changes nothing
    let table = run_batch(
        root.path(),
        "2xyz\n1abc\n3def\n",
        Some("3def\n9zzz\n"),
        "2",
    );
    let ids: Vec<&str> = table
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap())
        .collect();
    assert_eq!(ids, ["2xyz", "1abc"]);
}

#[test]
fn test_cli_output_independent_of_worker_count() {
    let root_a = tempfile::tempdir().unwrap();
    let root_b = tempfile::tempdir().unwrap();
    for root in [root_a.path(), root_b.path()] {
        for id in ["1abc", "2xyz", "3def", "4ghi"] {
            write_complex(root, id);
        }
    }
    let list = "1abc\n2xyz\n3def\n4ghi\n";

    let serial = run_batch(root_a.path(), list, None, "1");
    let parallel = run_batch(root_b.path(), list, None, "4");
    assert_eq!(serial, parallel);
}

#[test]
fn test_cli_fails_on_missing_complex() {
    let root = tempfile::tempdir().unwrap();
    write_complex(root.path(), "1abc");

    let list_file = root.path().join("pdbs.txt");
    fs::write(&list_file, "1abc\n5mno\n").unwrap();
    let output_file = root.path().join("features.csv");

    // 5mno has no structure files: the whole batch aborts
    let mut cmd = Command::cargo_bin("rfscore-features").unwrap();
    cmd.arg(&list_file).arg(root.path()).arg(&output_file);
    cmd.assert().failure();
    assert!(!output_file.exists());
}
