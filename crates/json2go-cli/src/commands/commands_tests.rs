use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::check::{CheckArgs, check};
use super::generate::{GenerateArgs, generate};
use super::input::CommandError;

const PERSON: &str = r#"{
  "kind": "object",
  "name": "Person",
  "children": [
    {"kind": "int", "name": "age", "required": false},
    {"kind": "string", "name": "name", "required": false},
    {"kind": "time", "name": "born"}
  ]
}"#;

fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("tree.json");
    fs::write(&path, contents).unwrap();
    path
}

fn generate_args(input: &Path, output: &Path) -> GenerateArgs {
    GenerateArgs {
        input: Some(input.to_path_buf()),
        output: Some(output.to_path_buf()),
        string_pointers: false,
        time_as_string: false,
        indent_spaces: None,
    }
}

#[test]
fn generate_writes_file_with_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, PERSON);
    let output = dir.path().join("types.go");

    generate(&generate_args(&input, &output)).unwrap();

    let res = fs::read_to_string(&output).unwrap();
    assert_eq!(
        res,
        "type Person struct {\n\tage  *int64    `json:\"age,omitempty\"`\n\tborn time.Time `json:\"born\"`\n\tname string    `json:\"name,omitempty\"`\n}\n"
    );
}

#[test]
fn generate_with_options() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, PERSON);
    let output = dir.path().join("types.go");

    let args = GenerateArgs {
        string_pointers: true,
        time_as_string: true,
        indent_spaces: Some(4),
        ..generate_args(&input, &output)
    };
    generate(&args).unwrap();

    let res = fs::read_to_string(&output).unwrap();
    assert!(res.ends_with("}\n"));
    insta::assert_snapshot!(res.trim_end(), @r#"
    type Person struct {
        age  *int64  `json:"age,omitempty"`
        born string  `json:"born"`
        name *string `json:"name,omitempty"`
    }
    "#);
}

#[test]
fn generate_reports_invalid_tree() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"{"kind": "int", "name": "N", "children": [{"kind": "int", "name": "M"}]}"#,
    );
    let output = dir.path().join("types.go");

    let err = generate(&generate_args(&input, &output)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid node tree: N: int node cannot have children"
    );
    assert!(!output.exists());
}

#[test]
fn missing_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.json");

    let err = check(&CheckArgs { input: Some(input) }).unwrap_err();
    assert!(matches!(err, CommandError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read '"));
}

#[test]
fn empty_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "  \n");

    let err = check(&CheckArgs { input: Some(input) }).unwrap_err();
    assert_eq!(err.to_string(), "input is empty");
}

#[test]
fn check_counts_declarations() {
    let dir = TempDir::new().unwrap();
    let forest = format!(r#"[{PERSON}, {{"kind": "time", "name": "Stamp"}}]"#);
    let input = write_input(&dir, &forest);

    assert_eq!(check(&CheckArgs { input: Some(input) }).unwrap(), 2);
}

#[test]
fn check_reports_malformed_json() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "[{");

    let err = check(&CheckArgs { input: Some(input) }).unwrap_err();
    assert!(matches!(err, CommandError::Forest(json2go_lib::Error::Parse(_))));
}
