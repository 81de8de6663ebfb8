//! CLI end-to-end tests
//!
//! Tests for the ffscript command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the ffscript binary, run from `dir` with logging defaults
#[allow(deprecated)]
fn ffscript_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ffscript").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

#[test]
fn test_cli_help_flag() {
    let temp = tempdir().unwrap();
    ffscript_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ffscript"))
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--script-type"));
}

#[test]
fn test_cli_version_flag() {
    let temp = tempdir().unwrap();
    ffscript_cmd(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ffscript"));
}

#[test]
fn test_cli_default_writes_powershell_script() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("movie.mkv"));

    ffscript_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO"))
        .stdout(predicate::str::contains("Running command: \"-codec copy\""))
        .stdout(predicate::str::contains("Done, processed \"1\" file(s)."));

    let script = temp.path().join("run-ffmpeg.ps1");
    let content = fs::read_to_string(&script).unwrap();
    assert!(content.starts_with("function Invoke-Call {"));
    assert!(content.contains("-hide_banner -i"));
    assert!(content.contains("movie.mp4"));
    assert!(content.contains(&format!("Remove-Item -Force \"{}\"", script.display())));
}

#[test]
fn test_cli_no_files_fails_without_script() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("notes.txt"));

    ffscript_cmd(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("ERROR"))
        .stdout(predicate::str::contains("No video files to process"));

    assert!(!temp.path().join("run-ffmpeg.ps1").exists());
}

#[test]
fn test_cli_missing_directory_fails() {
    let temp = tempdir().unwrap();

    ffscript_cmd(temp.path())
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR"));
}

#[test]
fn test_cli_batch_script() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("clip.avi"));

    ffscript_cmd(temp.path())
        .args(["--script-type", "batch", "--out", "mkv"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("run-ffmpeg.bat")).unwrap();
    assert!(content.contains("clip.mkv\" || goto :error"));
    assert!(content.contains(":error"));
    assert!(content.trim_end().ends_with("exit /b %errorlevel%"));
}

#[test]
fn test_cli_invalid_script_type_falls_back() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("clip.avi"));

    ffscript_cmd(temp.path())
        .args(["--script-type", "fish"])
        .assert()
        .success();

    assert!(temp.path().join("run-ffmpeg.ps1").exists());
}

#[test]
fn test_cli_exclude() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("a.mkv"));
    touch(&temp.path().join("b.mkv"));

    ffscript_cmd(temp.path())
        .args(["--script-type", "text", "--exclude", "^a"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("run-ffmpeg.txt")).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("b.mkv"));
    assert!(!content.contains("a.mkv"));
}

#[test]
fn test_cli_recursive_bash() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("x.mkv"));
    touch(&temp.path().join("sub/y.mkv"));
    touch(&temp.path().join("sub/sub2/z.mkv"));

    ffscript_cmd(temp.path())
        .args(["--recursive", "--script-type", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recursive mode."));

    let content = fs::read_to_string(temp.path().join("run-ffmpeg.sh")).unwrap();
    assert!(content.starts_with("#!/bin/bash\nset -euxo pipefail\n"));
    for name in ["x.mkv", "y.mkv", "z.mkv"] {
        assert_eq!(content.matches(&format!("{}\"", name)).count(), 1, "{}", name);
    }
}

#[test]
fn test_cli_delete_source() {
    let temp = tempdir().unwrap();
    let movie = temp.path().join("movie.mkv");
    touch(&movie);

    ffscript_cmd(temp.path())
        .args(["--delete-source=true", "--script-type", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WARN"))
        .stdout(predicate::str::contains("Deleting source files."));

    let content = fs::read_to_string(temp.path().join("run-ffmpeg.sh")).unwrap();
    assert!(content.contains(&format!("rm -f \"{}\"", movie.display())));
    // Source files are only deleted by the generated script
    assert!(movie.exists());
}

#[test]
fn test_cli_delete_source_space_form_is_rejected() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("movie.mkv"));

    ffscript_cmd(temp.path())
        .args(["--delete-source", "true"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("--flag=true"));

    assert!(!temp.path().join("run-ffmpeg.ps1").exists());
}

#[test]
fn test_cli_same_extension_avoids_collision() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("movie.mp4"));
    touch(&temp.path().join("movie_(1).mp4"));

    ffscript_cmd(temp.path())
        .args(["--script-type", "text", "--extensions", "mp4"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("run-ffmpeg.txt")).unwrap();
    let source = temp.path().join("movie.mp4");
    let taken = temp.path().join("movie_(1).mp4");
    assert!(content.contains(&format!(
        "-i \"{}\" -codec copy \"{}\"",
        source.display(),
        temp.path().join("movie_(2).mp4").display()
    )));
    // movie_(1).mp4 is a source too and gets its own `_(1)` suffix
    assert!(content.contains(&format!(
        "-i \"{}\" -codec copy \"{}\"",
        taken.display(),
        temp.path().join("movie_(1)_(1).mp4").display()
    )));
}

#[test]
fn test_cli_dry_run_prints_script() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("movie.mkv"));

    ffscript_cmd(temp.path())
        .args(["--dry-run", "--script-type", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#!/bin/bash"))
        .stdout(predicate::str::contains("[DRY RUN]"));

    assert!(!temp.path().join("run-ffmpeg.sh").exists());
}

#[test]
fn test_cli_with_config_file() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("movie.mkv"));
    let config_file = temp.path().join("settings.toml");
    fs::write(
        &config_file,
        r#"
command = "-c:v libx265 -crf 22"
out = "mkv"
script_type = "bash"
script_name = "convert"

[tools]
ffmpeg_path = "/opt/ffmpeg/bin/ffmpeg"
"#,
    )
    .unwrap();

    ffscript_cmd(temp.path())
        .args(["--config", config_file.to_str().unwrap(), "--out", "webm"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("convert.sh")).unwrap();
    assert!(content.contains("/opt/ffmpeg/bin/ffmpeg -hide_banner -i"));
    assert!(content.contains("-c:v libx265 -crf 22"));
    assert!(content.contains("movie.webm\""));
}

#[test]
fn test_cli_default_config_file_in_working_directory() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("movie.mkv"));
    fs::write(temp.path().join("ffscript.toml"), "script_type = \"text\"\n").unwrap();

    ffscript_cmd(temp.path()).assert().success();

    assert!(temp.path().join("run-ffmpeg.txt").exists());
}

#[test]
fn test_cli_invalid_config_file_fails() {
    let temp = tempdir().unwrap();
    touch(&temp.path().join("movie.mkv"));
    let config_file = temp.path().join("broken.toml");
    fs::write(&config_file, "recursive = [").unwrap();

    ffscript_cmd(temp.path())
        .args(["--config", config_file.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to parse config file"));
}
