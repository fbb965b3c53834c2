use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Empty repository with a `.git/objects` directory
#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::create_dir_all(dir.path().join(".git").join("objects"))
        .expect("Failed to create objects dir");
    dir
}

pub fn run_bit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bit").expect("Failed to find bit binary");
    cmd.env_remove("GIT_DIR");
    cmd.env_remove("GIT_OBJECT_DIRECTORY");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn bit_cat_file(dir: &Path, flag: &str, oid: &str) -> Command {
    run_bit_command(dir, &["cat-file", flag, oid])
}
