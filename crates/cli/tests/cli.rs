//! Command-line tests for the autointerface binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_compilation(dir: &Path, file_name: &str, types: serde_json::Value) {
    let compilation = json!({ "types": types });
    fs::write(dir.join(file_name), compilation.to_string()).unwrap();
}

fn person() -> serde_json::Value {
    json!([{
        "name": "Person", "namespace": "Demo",
        "attributes": [ { "name": "GenerateAutomaticInterface" } ],
        "syntax": { "leading_trivia": "" },
        "members": [ {
            "kind": "property", "name": "Name", "accessibility": "public",
            "type": { "kind": "named", "namespace": "System", "name": "String" },
            "getter": {}, "setter": {}
        } ]
    }])
}

fn autointerface() -> Command {
    let mut cmd = Command::cargo_bin("autointerface").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_generate_to_stdout() {
    let temp = TempDir::new().unwrap();
    write_compilation(temp.path(), "demo.json", person());

    autointerface()
        .current_dir(temp.path())
        .args(["generate", "demo.json", "--no-attributes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("// Demo.IPerson.g.cs"))
        .stdout(predicate::str::contains("public partial interface IPerson"))
        .stdout(predicate::str::contains("string Name { get; set; }"))
        .stdout(predicate::str::contains("AttributeUsage").not());
}

#[test]
fn test_generate_writes_files() {
    let temp = TempDir::new().unwrap();
    let inputs = temp.path().join("inputs");
    fs::create_dir_all(&inputs).unwrap();
    write_compilation(&inputs, "demo.json", person());
    let out = temp.path().join("generated");

    autointerface()
        .args(["generate"])
        .arg(&inputs)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 1 interfaces from 1 compilations"));

    let interface = fs::read_to_string(out.join("Demo.IPerson.g.cs")).unwrap();
    assert!(interface.contains("namespace Demo"));
    assert!(out.join("GenerateAutomaticInterface.Attribute.g.cs").is_file());
    assert!(out.join("IgnoreAutomaticInterface.Attribute.g.cs").is_file());
}

#[test]
fn test_generate_uses_config_next_to_input() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".autointerface.json"),
        r#"{ "attribute_name": "MakeInterface", "emit_marker_attributes": false }"#,
    )
    .unwrap();
    let mut types = person();
    types[0]["attributes"] = json!([ { "name": "MakeInterface" } ]);
    write_compilation(temp.path(), "demo.json", types);

    autointerface()
        .arg("generate")
        .arg(temp.path().join("demo.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("public partial interface IPerson"))
        .stdout(predicate::str::contains("MakeInterfaceAttribute").not());
}

#[test]
fn test_fatal_error_exits_non_zero_with_diagnostic() {
    let temp = TempDir::new().unwrap();
    write_compilation(
        temp.path(),
        "cycle.json",
        json!([
            { "name": "A", "namespace": "Demo",
              "attributes": [ { "name": "GenerateAutomaticInterface" } ],
              "base_type": { "kind": "named", "namespace": "Demo", "name": "B" },
              "syntax": { "leading_trivia": "" } },
            { "name": "B", "namespace": "Demo",
              "base_type": { "kind": "named", "namespace": "Demo", "name": "A" } }
        ]),
    );

    autointerface()
        .arg("generate")
        .arg(temp.path().join("cycle.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error AI0001"))
        .stderr(predicate::str::contains("cyclic inheritance"));
}

#[test]
fn test_missing_input_fails() {
    let temp = TempDir::new().unwrap();

    autointerface()
        .arg("generate")
        .arg(temp.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_inspect_prints_models() {
    let temp = TempDir::new().unwrap();
    write_compilation(temp.path(), "demo.json", person());

    autointerface()
        .arg("inspect")
        .arg(temp.path().join("demo.json"))
        .args(["--class", "Person"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "IPerson""#))
        .stdout(predicate::str::contains(r#""source_class": "Demo.Person""#));

    autointerface()
        .arg("inspect")
        .arg(temp.path().join("demo.json"))
        .args(["--class", "Nobody"])
        .assert()
        .failure();
}

#[test]
fn test_init_creates_config_once() {
    let temp = TempDir::new().unwrap();

    autointerface()
        .args(["init", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));
    assert!(temp.path().join(".autointerface.json").is_file());

    autointerface()
        .args(["init", "--cwd"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_same_interface_from_two_compilations_keeps_both_files() {
    let temp = TempDir::new().unwrap();
    let inputs = temp.path().join("inputs");
    fs::create_dir_all(&inputs).unwrap();
    write_compilation(&inputs, "a.json", person());
    write_compilation(&inputs, "b.json", person());
    let out = temp.path().join("generated");

    autointerface()
        .arg("generate")
        .arg(&inputs)
        .arg("--out")
        .arg(&out)
        .arg("--no-attributes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 interfaces from 2 compilations"));

    let written: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();

    assert_eq!(written.len(), 2);
    assert!(written.iter().any(|name| name == "Demo.IPerson.g.cs"));
    assert!(written.iter().any(|name| {
        name != "Demo.IPerson.g.cs" && name.starts_with("Demo.IPerson.") && name.ends_with(".g.cs")
    }));
}
