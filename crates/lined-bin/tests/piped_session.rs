use std::io::Write;
use std::process::{Command, Stdio};

fn run_lined(dir: &std::path::Path, args: &[&str], script: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lined"))
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn lined");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn edits_a_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "one\ntwo\n").unwrap();

    let out = run_lined(
        dir.path(),
        &["notes.txt", "--config", "absent.toml"],
        "M 0 ONE\nG 1\nC two 2\nW\nQ\n",
    );
    assert!(out.contains("Read 2 lines from notes.txt"));
    assert!(out.contains("Line 0 has been modified"));
    assert!(out.contains("Wrote 2 lines"));
    assert!(out.trim_end().ends_with("Bye"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
        "ONE\n2\n"
    );
    assert!(dir.path().join("lined.log").exists());
}

#[test]
fn missing_startup_file_still_runs() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_lined(dir.path(), &["nope.txt"], "I 0 hi\ns\n");
    assert!(out.contains("unable to read nope.txt"));
    assert!(out.contains("Current line is 0 (modified)"));
}
