//! Scripted sessions against the interactive menu.

use std::io::Cursor;
use std::path::Path;

use tempfile::TempDir;

use workforce::shell::Shell;
use workforce::{PayModel, PositionCatalog, Registry};

fn run_session(data_dir: &Path, registry: Registry, script: &str) -> (Registry, String) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut shell = Shell::new(registry, data_dir, input, Vec::new());

    shell.run().expect("session runs");

    let (registry, output) = shell.into_parts();
    (registry, String::from_utf8(output).expect("utf-8 output"))
}

fn empty_registry() -> Registry {
    Registry::new(PositionCatalog::standard())
}

#[test]
fn add_sort_and_average() {
    let dir = TempDir::new().expect("temp dir");
    let script = "\
2\n1\n1 Manager Petrov Petr Petrovich 1980\n\
2\n2\n2 Programmer Ivanov Ivan Ivanovich 1990\n\
3\n\
7\n\
9\n";

    let (registry, output) = run_session(dir.path(), empty_registry(), script);

    let ids: Vec<_> = registry.employees().iter().map(|e| e.id).collect();
    assert_eq!(ids, [2, 1]);
    assert_eq!(output.matches("Employee added").count(), 2);
    assert!(output.contains("List sorted"));
    assert!(output.contains("Average salary in the organization: 58944"));
}

#[test]
fn invalid_input_is_reported_and_loop_continues() {
    let dir = TempDir::new().expect("temp dir");
    let script = "\
0\nabc\n2\n1\n1 Janitor A B C 1990\n\
2\n1\nx Tester A B C 1990\n\
2\n1\n1 Tester A B C\n\
3\n4\n5\n6\n7\n\
9\n";

    let (registry, output) = run_session(dir.path(), empty_registry(), script);

    assert!(registry.is_empty());
    assert!(output.contains("unknown position `Janitor`"));
    assert!(output.contains("id must be an integer, got `x`"));
    assert!(output.contains("expected 6 fields, got 5"));
    assert!(output.contains("The list is empty"));
    assert!(output.contains("Not enough employees"));
}

#[test]
fn duplicate_id_is_refused() {
    let dir = TempDir::new().expect("temp dir");
    let script = "\
2\n1\n5 Tester A B C 1990\n\
2\n2\n5 Designer D E F 1991\n\
9\n";

    let (registry, output) = run_session(dir.path(), empty_registry(), script);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.employees()[0].pay_model, PayModel::Fixed);
    assert!(output.contains("id 5 is already taken"));
}

#[test]
fn save_then_load_in_a_new_session() {
    let dir = TempDir::new().expect("temp dir");
    let first = "\
2\n1\n1 Programmer Ivanov Ivan Ivanovich 1990\n\
2\n2\n2 Tester Petrova Anna Sergeevna 1994\n\
8\n1\nstaff\n\
8\n2\nstaff\n\
9\n";
    let (saved, output) = run_session(dir.path(), empty_registry(), first);
    assert_eq!(output.matches("Data saved").count(), 2);
    assert!(dir.path().join("staff.xml").exists());
    assert!(dir.path().join("staff.json").exists());

    for format_choice in ["1", "2"] {
        let script = format!("1\n{format_choice}\nstaff\n6\n9\n");
        let (loaded, output) = run_session(dir.path(), empty_registry(), &script);

        assert!(output.contains("Data loaded"));
        assert!(output.contains("Full name: Petrova Anna Sergeevna"));
        assert_eq!(loaded.employees(), saved.employees());
    }
}

#[test]
fn failed_loads_keep_current_employees() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("broken.json"), "[{").expect("write file");
    let mut registry = empty_registry();
    registry
        .hire(PayModel::Hourly, &["7", "Designer", "A", "B", "C", "1990"])
        .expect("valid hire");
    let script = "\
1\n2\nmissing\n\
1\n2\nbroken\n\
1\n1\nbad|name\n\
9\n";

    let (after, output) = run_session(dir.path(), registry.clone(), script);

    assert!(output.contains("The file was not found"));
    assert!(output.contains("The file cannot be read"));
    assert!(output.contains("The file name contains invalid characters"));
    assert_eq!(after.employees(), registry.employees());
}

#[test]
fn windows_over_the_list() {
    let dir = TempDir::new().expect("temp dir");
    let mut registry = empty_registry();
    for id in 1..=6 {
        let patronymic = format!("P{id}");
        let id = id.to_string();
        registry
            .hire(PayModel::Fixed, &[id.as_str(), "Tester", "Surname", "Name", patronymic.as_str(), "1990"])
            .expect("valid hire");
    }

    let (_, output) = run_session(dir.path(), registry, "4\n5\n9\n");

    assert!(output.contains("5: Surname Name P5"));
    assert!(!output.contains("6: Surname Name P6"));
    assert!(output.contains("4: 4\n5: 5\n6: 6\n"));
    assert!(!output.contains("3: 3\n"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().expect("temp dir");

    let (registry, _) = run_session(dir.path(), empty_registry(), "2\n1\n");

    assert!(registry.is_empty());
}
