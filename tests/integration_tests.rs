//! Integration tests for the spritegen binary
//!
//! These tests run the binary in a scratch working directory and check exit
//! codes and the PNG files it leaves under assets/sprites.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::Rgba;
use sha2::{Digest, Sha256};
use spritegen::registry;
use tempfile::tempdir;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Run spritegen with `workdir` as its working directory
fn run_spritegen(workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spritegen"))
        .args(args)
        .current_dir(workdir)
        .output()
        .expect("Failed to execute spritegen")
}

fn sprites_dir(workdir: &Path) -> PathBuf {
    workdir.join("assets").join("sprites")
}

/// SHA-256 of every file in the output directory, sorted by name
fn digest_outputs(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut digests: Vec<_> = fs::read_dir(dir)
        .expect("Failed to read output dir")
        .flatten()
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let bytes = fs::read(entry.path()).expect("Failed to read output file");
            (name, Sha256::digest(&bytes).to_vec())
        })
        .collect();
    digests.sort();
    digests
}

fn load(workdir: &Path, name: &str) -> image::RgbaImage {
    let path = sprites_dir(workdir).join(format!("{}.png", name));
    image::open(&path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {}", path.display(), e))
        .to_rgba8()
}

/// A fresh location without assets/sprites gets the directory created
#[test]
fn test_creates_missing_output_dir() {
    let workdir = tempdir().unwrap();
    assert!(!sprites_dir(workdir.path()).exists());

    let output = run_spritegen(workdir.path(), &[]);

    assert!(
        output.status.success(),
        "spritegen failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(sprites_dir(workdir.path()).is_dir());
}

/// Every registered sprite becomes a PNG of its declared size
#[test]
fn test_every_sprite_written_with_declared_size() {
    let workdir = tempdir().unwrap();
    let output = run_spritegen(workdir.path(), &[]);
    assert!(output.status.success());

    let files = fs::read_dir(sprites_dir(workdir.path())).unwrap().count();
    assert_eq!(files, registry::sprites().len());

    for descriptor in registry::sprites() {
        let image = load(workdir.path(), descriptor.name);
        assert_eq!(
            image.dimensions(),
            (descriptor.size, descriptor.size),
            "wrong size for '{}'",
            descriptor.name
        );
    }
}

/// Running twice produces byte-identical files
#[test]
fn test_rerun_is_byte_identical() {
    let workdir = tempdir().unwrap();

    assert!(run_spritegen(workdir.path(), &[]).status.success());
    let first = digest_outputs(&sprites_dir(workdir.path()));

    assert!(run_spritegen(workdir.path(), &[]).status.success());
    let second = digest_outputs(&sprites_dir(workdir.path()));

    assert_eq!(first.len(), registry::sprites().len());
    assert_eq!(first, second);
}

/// Two separate checkouts generate the same bytes
#[test]
fn test_output_independent_of_location() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();

    assert!(run_spritegen(a.path(), &[]).status.success());
    assert!(run_spritegen(b.path(), &[]).status.success());

    assert_eq!(
        digest_outputs(&sprites_dir(a.path())),
        digest_outputs(&sprites_dir(b.path()))
    );
}

/// The fire sprite round-trips through PNG with its base and transparent gaps
#[test]
fn test_fire_pixels_on_disk() {
    let workdir = tempdir().unwrap();
    assert!(run_spritegen(workdir.path(), &[]).status.success());

    let fire = load(workdir.path(), "fire");
    assert_eq!(*fire.get_pixel(8, 13), Rgba([50, 50, 50, 255]));
    assert_eq!(*fire.get_pixel(8, 1), TRANSPARENT);
    assert_eq!(*fire.get_pixel(3, 8), TRANSPARENT);
    assert_eq!(*fire.get_pixel(0, 0), TRANSPARENT);
}

/// The gp sprite's top coin spans exactly (4,4)-(12,12)
#[test]
fn test_gp_top_coin_on_disk() {
    let workdir = tempdir().unwrap();
    assert!(run_spritegen(workdir.path(), &[]).status.success());

    let gp = load(workdir.path(), "gp");
    let gold = Rgba([255, 215, 0, 255]);
    assert_eq!(*gp.get_pixel(8, 4), gold);
    assert_eq!(*gp.get_pixel(12, 8), gold);
    assert_eq!(*gp.get_pixel(8, 3), TRANSPARENT);
    assert_eq!(*gp.get_pixel(13, 8), TRANSPARENT);
}

/// Semi-transparent fills survive encoding unblended
#[test]
fn test_translucency_preserved_on_disk() {
    let workdir = tempdir().unwrap();
    assert!(run_spritegen(workdir.path(), &[]).status.success());

    let spot = load(workdir.path(), "fishing_spot");
    assert_eq!(*spot.get_pixel(8, 8), Rgba([100, 200, 255, 128]));
    assert_eq!(*spot.get_pixel(0, 0), TRANSPARENT);
}

/// bronze_axe is the axe drawn under another name
#[test]
fn test_bronze_axe_matches_axe() {
    let workdir = tempdir().unwrap();
    assert!(run_spritegen(workdir.path(), &[]).status.success());

    assert_eq!(load(workdir.path(), "axe"), load(workdir.path(), "bronze_axe"));
}

/// Stale files from an earlier run are overwritten
#[test]
fn test_overwrites_existing_files() {
    let workdir = tempdir().unwrap();
    let dir = sprites_dir(workdir.path());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("player.png"), b"stale").unwrap();

    assert!(run_spritegen(workdir.path(), &[]).status.success());

    assert_eq!(load(workdir.path(), "player").dimensions(), (16, 16));
}

/// An unwritable output location is fatal with exit code 1
#[test]
fn test_blocked_output_dir_fails() {
    let workdir = tempdir().unwrap();
    // A regular file where the assets directory should be
    fs::write(workdir.path().join("assets"), b"").unwrap();

    let output = run_spritegen(workdir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains("caused by:"), "stderr: {}", stderr);
}

/// The binary takes no arguments
#[test]
fn test_rejects_arguments() {
    let workdir = tempdir().unwrap();

    let output = run_spritegen(workdir.path(), &["--scale", "2"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!workdir.path().join("assets").exists());
}

#[test]
fn test_version_flag() {
    let workdir = tempdir().unwrap();

    let output = run_spritegen(workdir.path(), &["--version"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("spritegen"));
    assert!(!workdir.path().join("assets").exists());
}
