//! Runs the `generate_seeds` binary the way a user would.

use std::fs::read_to_string;
use std::path::Path;
use std::process::Command;
use std::process::Output;

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate_seeds"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn test_five_seeds() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&["5", "100", "out/seeds.csv"], dir.path());

    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert!(String::from_utf8_lossy(&out.stdout).contains("out/seeds.csv"));

    let text = read_to_string(dir.path().join("out/seeds.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "plate_id,x,y");
    for (i, line) in lines[1..].iter().enumerate() {
        let cols: Vec<u32> = line.split(',').map(|c| c.parse().unwrap()).collect();
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0] as usize, i);
        assert!(cols[1] < 100 && cols[2] < 100);
    }
}

#[test]
fn test_output_path_starting_with_hyphen() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&["5", "10", "-out.csv"], dir.path());

    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    let text = read_to_string(dir.path().join("-out.csv")).unwrap();
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn test_zero_seeds() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&["0", "10", "out/seeds.csv"], dir.path());

    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    assert_eq!(
        read_to_string(dir.path().join("out/seeds.csv")).unwrap(),
        "plate_id,x,y\n"
    );
}

#[test]
fn test_missing_args() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&["5"], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Usage"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_too_many_args() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&["5", "10", "a.csv", "extra"], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("a.csv").exists());
}

#[test]
fn test_non_numeric_count() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&["abc", "10", "out.csv"], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid seed count \"abc\""));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_negative_grid_size() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&["5", "-10", "out.csv"], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid grid size"));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_zero_grid_size() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&["5", "0", "out.csv"], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("grid size must be greater than zero"));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("taken")).unwrap();
    // Output path names an existing directory.
    let out = run(&["5", "10", "taken"], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("cannot write"));
}

#[test]
fn test_rng_seed_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.csv", "b.csv"] {
        let out = run(&["200", "5120", name, "--rng-seed", "17"], dir.path());
        assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));
    }
    assert_eq!(
        read_to_string(dir.path().join("a.csv")).unwrap(),
        read_to_string(dir.path().join("b.csv")).unwrap()
    );
}

#[test]
fn test_help_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(&["--help"], dir.path());

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("<SEED_COUNT>"));
}
