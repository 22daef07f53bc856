//! End-to-end tests for the fmtsweep binary.
//!
//! The binary always scans the default kernel directories relative to its
//! working directory, so each test builds a small tree in a temp dir and
//! controls which `clang-format` is visible through PATH.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn fmtsweep() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fmtsweep"))
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "int main(void){return 0;}\n").unwrap();
}

fn kernel_tree(base: &Path) {
    touch(&base.join("src/kernel/thread.c"));
    touch(&base.join("src/kernel/thread.h"));
    touch(&base.join("src/devices/timer.c"));
    touch(&base.join("src/filesys/inode.c"));
    touch(&base.join("src/filesys/Make.vars"));
    touch(&base.join("src/lib/string.c"));
    touch(&base.join("src/userprog/process.c"));
    touch(&base.join("README.c"));
}

#[test]
fn test_version_flag() {
    fmtsweep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fmtsweep"));
}

#[test]
fn test_rejects_unknown_flags() {
    fmtsweep().arg("--jobs=4").assert().failure();
}

#[test]
fn test_empty_directory_succeeds() {
    let temp = tempdir().unwrap();

    fmtsweep().current_dir(temp.path()).assert().success();
}

#[test]
fn test_missing_formatter_is_not_an_error() {
    let temp = tempdir().unwrap();
    kernel_tree(temp.path());
    let empty_path = temp.path().join("no-tools");
    fs::create_dir(&empty_path).unwrap();

    fmtsweep()
        .current_dir(temp.path())
        .env("PATH", &empty_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error").not());
}

#[cfg(unix)]
mod with_fake_formatter {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;

    /// Install a `clang-format` that appends its arguments to `calls.log` and
    /// exits with `status`.
    fn install_fake_clang_format(base: &Path, status: i32) -> std::path::PathBuf {
        let bin = base.join("fake-bin");
        fs::create_dir(&bin).unwrap();
        let log = base.join("calls.log");
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\nexit {status}\n",
            log.display()
        );
        let tool = bin.join("clang-format");
        fs::write(&tool, script).unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        bin
    }

    fn recorded_calls(base: &Path) -> Vec<String> {
        fs::read_to_string(base.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_formats_default_roots_in_order() {
        let temp = tempdir().unwrap();
        kernel_tree(temp.path());
        let bin = install_fake_clang_format(temp.path(), 0);

        fmtsweep()
            .current_dir(temp.path())
            .env("PATH", &bin)
            .assert()
            .success();

        assert_eq!(
            recorded_calls(temp.path()),
            vec![
                "-i -style=file src/devices/timer.c",
                "-i -style=file src/kernel/thread.c",
                "-i -style=file src/kernel/thread.h",
                "-i -style=file src/filesys/inode.c",
            ]
        );
    }

    #[test]
    fn test_failing_formatter_does_not_change_exit_code() {
        let temp = tempdir().unwrap();
        kernel_tree(temp.path());
        let bin = install_fake_clang_format(temp.path(), 1);

        fmtsweep()
            .current_dir(temp.path())
            .env("PATH", &bin)
            .assert()
            .success();

        assert_eq!(recorded_calls(temp.path()).len(), 4);
    }
}
