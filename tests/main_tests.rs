use pngdims::Dimensions;
use pngdims::formats::png::encode_header;
use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn pngdims(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pngdims"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_mixed_outcomes_exit_successfully() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.png");
    let short = dir.path().join("short.png");
    let img = dir.path().join("img.png");
    let sub = dir.path().join("shots");
    fs::write(&short, [0u8; 10]).unwrap();
    fs::write(&img, encode_header(Dimensions::new(256, 128))).unwrap();
    fs::create_dir(&sub).unwrap();

    let output = pngdims(&[
        missing.as_os_str(),
        short.as_os_str(),
        img.as_os_str(),
        sub.as_os_str(),
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "missing.png: File not found");
    assert_eq!(lines[1], "short.png: Invalid file");
    assert_eq!(lines[2], "img.png: 256x128");
    assert!(lines[3].starts_with("shots: Read error: "), "{}", lines[3]);
}

#[test]
fn test_no_paths_warns_on_stderr_only() {
    let output = pngdims(&[]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no paths given"), "{}", stderr);
}

#[test]
fn test_unreadable_list_file_fails() {
    let dir = TempDir::new().unwrap();
    let list = dir.path().join("nope.txt");

    let output = pngdims(&[OsStr::new("--from"), list.as_os_str()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to read path list"), "{}", stderr);
    assert!(stderr.contains(&list.display().to_string()), "{}", stderr);
    assert!(!stderr.contains("Some("), "{}", stderr);
}

#[test]
fn test_list_file_feeds_the_report() {
    let dir = TempDir::new().unwrap();
    let img = dir.path().join("img.png");
    fs::write(&img, encode_header(Dimensions::new(1, 2))).unwrap();
    let list = dir.path().join("files.txt");
    fs::write(&list, format!("# one file\n{}\n", img.display())).unwrap();

    let output = pngdims(&[OsStr::new("--from"), list.as_os_str()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "img.png: 1x2\n");
}
