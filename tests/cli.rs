#![cfg(unix)]
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn page_cmd() -> Command {
    Command::new(cargo_bin("yt-playlist-page"))
}

/// Write an executable shell script standing in for the extractor
fn fake_extractor(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-yt-dlp");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

const SCENARIO_SCRIPT: &str = r#"[ "$1" = "--flat-playlist" ] || exit 2
[ "$2" = "--print" ] || exit 2
[ "$3" = "%(title)s|%(id)s" ] || exit 2
printf '%s\n' 'Intro|aaaaaaaaaaa' 'Bad Row' '[Private video]|bbbbbbbbbbb' 'Talk 2|ccccccccccc' 'Talk 10|ddddddddddd'"#;

#[test]
fn test_interactive_run_writes_page() {
    let temp = TempDir::new().unwrap();
    let extractor = fake_extractor(temp.path(), SCENARIO_SCRIPT);

    page_cmd()
        .current_dir(temp.path())
        .args(["--extractor", extractor.to_str().unwrap()])
        .write_stdin("https://www.youtube.com/playlist?list=PL123\nCourse\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter YouTube playlist URL: "))
        .stdout(predicate::str::contains("Fetching playlist…"))
        .stdout(predicate::str::contains("Course.html generated with 3 videos."));

    let html = fs::read_to_string(temp.path().join("Course.html")).unwrap();
    assert!(html.contains("<h2>Course</h2>"));
}

#[test]
fn test_flags_skip_prompts() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("pages");
    fs::create_dir(&out_dir).unwrap();
    let extractor = fake_extractor(temp.path(), SCENARIO_SCRIPT);

    page_cmd()
        .current_dir(temp.path())
        .args([
            "--extractor",
            extractor.to_str().unwrap(),
            "--url",
            "https://www.youtube.com/playlist?list=PL123",
            "--title",
            "My Playlist!! 2024",
            "--output-dir",
            out_dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter YouTube").not())
        .stdout(predicate::str::contains("My_Playlist_2024.html generated with 3 videos."));

    assert!(out_dir.join("My_Playlist_2024.html").exists());
}

#[test]
fn test_extractor_failure_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let extractor = fake_extractor(temp.path(), "echo 'ERROR: video unavailable' >&2\nexit 1");

    page_cmd()
        .current_dir(temp.path())
        .args(["--extractor", extractor.to_str().unwrap()])
        .write_stdin("https://www.youtube.com/watch?v=gone\nCourse\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: video unavailable"));

    assert!(!temp.path().join("Course.html").exists());
}

#[test]
fn test_no_valid_videos_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let extractor = fake_extractor(
        temp.path(),
        "printf '%s\\n' '[Private video]|bbbbbbbbbbb' 'garbage'",
    );

    page_cmd()
        .current_dir(temp.path())
        .args(["--extractor", extractor.to_str().unwrap(), "--url", "x", "--title", "Course"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No valid videos found."));

    assert!(!temp.path().join("Course.html").exists());
}
