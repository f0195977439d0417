use custom_lists::{Item, ListError, ListKind, LocalStorage, ReportWriter, TomlConfig};
use std::path::Path;
use tempfile::TempDir;

const SCENARIO: &str = r#"
[scenario]
name = "groceries"
description = "Mixed string and integer operations"

[list]
kind = "both"
initial_capacity = 2

[[operations]]
op = "add"
value = "milk"

[[operations]]
op = "add"
value = 12

[[operations]]
op = "add"
value = "bread"

[[operations]]
op = "insert"
index = 1
value = "eggs"

[[operations]]
op = "get"
index = 10

[[operations]]
op = "remove"
value = "milk"

[[operations]]
op = "sort"

[[operations]]
op = "size"
"#;

fn load(output_dir: &Path, formats: &[&str]) -> TomlConfig {
    let content = format!(
        "{}\n[output]\npath = {:?}\nformats = {:?}\n",
        SCENARIO,
        output_dir.display().to_string(),
        formats
    );
    TomlConfig::from_toml_str(&content).unwrap()
}

#[test]
fn test_end_to_end_scenario_writes_reports() {
    let temp_dir = TempDir::new().unwrap();
    let config = load(temp_dir.path(), &["json", "csv"]);
    config.validate_config().unwrap();

    let reports = config.to_plan().execute().unwrap();
    assert_eq!(reports.len(), 2);

    for report in &reports {
        assert_eq!(
            report.final_contents,
            vec![Item::from(12), Item::from("bread"), Item::from("eggs")]
        );
        assert_eq!(report.failed_steps(), 1);
        assert_eq!(report.outcomes.last().unwrap().value.as_deref(), Some("3"));
    }

    let writer = ReportWriter::new(
        LocalStorage::new(config.output_path()),
        config.report_formats().unwrap(),
    );
    for report in &reports {
        let paths = writer.write(report).unwrap();
        assert_eq!(paths.len(), 2);
    }

    let json_path = temp_dir.path().join("groceries_linked.json");
    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(json["scenario"], "groceries");
    assert_eq!(json["final_contents"], serde_json::json!([12, "bread", "eggs"]));

    let csv = std::fs::read_to_string(temp_dir.path().join("groceries_array.csv")).unwrap();
    assert!(csv.starts_with("step,operation,status,value,size_after"));
    assert!(csv.contains("5,get(10),failed,"));
    assert_eq!(csv.lines().count(), 9);
}

#[test]
fn test_single_implementation_override() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = load(temp_dir.path(), &["tsv"]);
    config.list.kind = ListKind::Linked;

    let reports = config.to_plan().execute().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].implementation, ListKind::Linked);
}

#[test]
fn test_abort_policy_surfaces_operation_error() {
    let temp_dir = TempDir::new().unwrap();
    let content = format!(
        "{}\n[error_handling]\non_error = \"abort\"\n",
        load_source(temp_dir.path())
    );
    let config = TomlConfig::from_toml_str(&content).unwrap();

    let err = config.to_plan().execute().unwrap_err();
    match err {
        ListError::OperationError { step, .. } => assert_eq!(step, 5),
        other => panic!("unexpected error: {:?}", other),
    }
}

fn load_source(output_dir: &Path) -> String {
    format!(
        "{}\n[output]\npath = {:?}\n",
        SCENARIO,
        output_dir.display().to_string()
    )
}
