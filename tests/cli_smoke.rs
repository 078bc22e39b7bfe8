mod common;

use std::{
    path::Path,
    process::{Command, Output},
};

fn docsift(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docsift"))
        .args(args)
        .env("DOCSIFT_LOG", "off")
        .env_remove("DOCSIFT_KEYWORDS")
        .env_remove("DOCSIFT_PREVIEW_CHARS")
        .output()
        .expect("failed to run docsift")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn setup_batch(dir: &Path) {
    std::fs::write(
        dir.join("alice.pdf"),
        common::make_pdf(&[&["Alice"], &["React, Node.js, Python"]]),
    )
    .unwrap();
    std::fs::write(
        dir.join("bob.pdf"),
        common::make_pdf(&[&["Bob", "Python and Django"]]),
    )
    .unwrap();
    std::fs::write(dir.join("broken.pdf"), b"not really a pdf").unwrap();
    std::fs::write(dir.join("notes.txt"), "react python").unwrap();
}

#[test]
fn rank_lists_all_documents_without_keywords() {
    let tmp = tempfile::tempdir().unwrap();
    setup_batch(tmp.path());

    let output = docsift(&["rank", tmp.path().to_str().unwrap()]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("All Uploaded Documents (2)"), "{out}");
    assert!(out.contains("alice.pdf"));
    assert!(out.contains("bob.pdf"));
    assert!(!out.contains("notes.txt"));
    assert!(
        stderr(&output).contains("Failed to process broken.pdf."),
        "{}",
        stderr(&output)
    );
}

#[test]
fn rank_orders_matches_by_score() {
    let tmp = tempfile::tempdir().unwrap();
    setup_batch(tmp.path());

    let output = docsift(&[
        "rank",
        tmp.path().to_str().unwrap(),
        "--keywords",
        "react, python",
        "--files",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "alice.pdf\nbob.pdf\n");
}

#[test]
fn rank_json_output() {
    let tmp = tempfile::tempdir().unwrap();
    setup_batch(tmp.path());

    let output = docsift(&[
        "rank",
        tmp.path().to_str().unwrap(),
        "-k",
        "django",
        "--json",
    ]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["view"], "matching");
    assert_eq!(value["total"], 1);
    assert_eq!(value["results"][0]["name"], "bob.pdf");
    assert_eq!(value["results"][0]["score"], 1);
}

#[test]
fn rank_with_no_matches() {
    let tmp = tempfile::tempdir().unwrap();
    setup_batch(tmp.path());

    let output =
        docsift(&["rank", tmp.path().to_str().unwrap(), "-k", "cobol"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Matching Documents (0)"));
    assert!(out.contains("No documents found matching your keywords."));
}

#[test]
fn rank_reports_empty_batch() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("broken.pdf"), b"garbage").unwrap();

    let output = docsift(&["rank", tmp.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Your document list is empty"));
}

#[test]
fn rank_fails_on_missing_path() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("missing");

    let output = docsift(&["rank", missing.to_str().unwrap()]);

    assert!(!output.status.success());
}

#[test]
fn show_prints_extracted_text() {
    let tmp = tempfile::tempdir().unwrap();
    setup_batch(tmp.path());
    let path = tmp.path().join("alice.pdf");

    let output = docsift(&["show", path.to_str().unwrap()]);

    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2, "{out}");
    assert!(lines[0].contains("Alice"));
    assert!(lines[1].contains("Python"));
}

#[test]
fn show_rejects_non_pdf() {
    let tmp = tempfile::tempdir().unwrap();
    setup_batch(tmp.path());
    let path = tmp.path().join("notes.txt");

    let output = docsift(&["show", path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("not a PDF file"));
}

#[test]
fn show_fails_on_corrupt_pdf() {
    let tmp = tempfile::tempdir().unwrap();
    setup_batch(tmp.path());
    let path = tmp.path().join("broken.pdf");

    let output = docsift(&["show", path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("broken.pdf"));
}
