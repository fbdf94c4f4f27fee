//! End-to-end tests for the convert command: file in, file out.

use island_trace::commands::{execute_convert, validate_args, ConvertArgs};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_trace(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("trace.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

const SAMPLE_TRACE: &str = r#"[
    {"data": {"heading": "W", "men": 3, "contracts": [{"amount": 40, "resource": "FISH"}], "budget": 500}},
    {"data": {"action": "echo", "parameters": {"direction": "N"}}},
    {"data": {"status": "OK", "cost": 1, "extras": {"found": "OUT_OF_RANGE", "range": 0}}},
    {"data": {"action": "scan", "parameters": {}}},
    {"data": {"status": "OK", "cost": 2, "extras": {"biomes": ["OCEAN"], "sites": [], "creeks": ["c-42"]}}}
]"#;

#[test]
fn test_convert_writes_complete_document() {
    let dir = TempDir::new().unwrap();
    let input = write_trace(&dir, SAMPLE_TRACE);
    let output = dir.path().join("output.xml");

    execute_convert(ConvertArgs {
        input,
        output: output.clone(),
    })
    .unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    // Declaration, then the presentation preamble, then the root
    assert_eq!(lines[0], "<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    assert_eq!(
        lines[1],
        "<?xml-stylesheet type=\"text/css\" href=\"style/style.css\"?>"
    );
    assert_eq!(lines[2], "<!DOCTYPE log SYSTEM \"islands.dtd\">");
    assert_eq!(lines[3], "<log>");
    assert!(lines[4].contains("jquery-3.2.1.min.js"));
    assert!(lines[5].contains("style/main.js"));

    // Context and both turns made it through
    assert!(content.contains("<direction dir=\"W\"/>"));
    assert!(content.contains("<men>3</men>"));
    assert!(content.contains("<found>OUT_OF_RANGE</found>"));
    assert!(content.contains("<landing>c-42</landing>"));
    assert!(content.ends_with("</log>\n"));
}

#[test]
fn test_convert_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let result = execute_convert(ConvertArgs {
        input: dir.path().join("missing.json"),
        output: dir.path().join("output.xml"),
    });
    assert!(result.is_err());
}

#[test]
fn test_convert_non_array_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_trace(&dir, r#"{"data": {}}"#);
    let output = dir.path().join("output.xml");

    let result = execute_convert(ConvertArgs {
        input,
        output: output.clone(),
    });
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_convert_unpaired_record_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_trace(
        &dir,
        r#"[
            {"data": {"heading": "N", "men": 1, "contracts": [], "budget": 10}},
            {"data": {"action": "scan", "parameters": {}}}
        ]"#,
    );
    let output = dir.path().join("output.xml");

    let result = execute_convert(ConvertArgs {
        input,
        output: output.clone(),
    });
    assert!(result.is_err());
    // No partial output on failure
    assert!(!output.exists());
}

#[test]
fn test_validate_args_rejects_empty_paths() {
    assert!(validate_args(&ConvertArgs {
        input: PathBuf::new(),
        output: PathBuf::from("out.xml"),
    })
    .is_err());
    assert!(validate_args(&ConvertArgs {
        input: PathBuf::from("trace.json"),
        output: PathBuf::new(),
    })
    .is_err());
}
