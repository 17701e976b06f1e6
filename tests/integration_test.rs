use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn grades(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("grades").unwrap();
    cmd.current_dir(temp_dir);
    cmd.env_remove("GRADES_DB");
    cmd
}

#[test]
fn test_full_workflow() {
    let temp_dir = TempDir::new().unwrap();

    grades(&temp_dir)
        .args(["add", "Ana", "Matemática", "9.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added grade #1"));

    grades(&temp_dir)
        .args(["add", "Bruno", "History", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added grade #2"));

    assert!(temp_dir.path().join("grades.db").exists());

    grades(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Matemática").and(predicate::str::contains("Bruno")));

    // Update only the grade of #2
    grades(&temp_dir)
        .args(["update", "2", "--grade", "8.5"])
        .assert()
        .success();

    grades(&temp_dir)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade:   8.5"));

    grades(&temp_dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted grade #1"));

    grades(&temp_dir)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Grade #1 not found"));
}

#[test]
fn test_add_rejects_bad_input() {
    let temp_dir = TempDir::new().unwrap();

    grades(&temp_dir)
        .args(["add", "Ana", "Math", "ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid grade"));

    grades(&temp_dir)
        .args(["add", "", "Math", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fill in all fields"));

    grades(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No grades recorded."));
}

#[test]
fn test_update_requires_a_field() {
    let temp_dir = TempDir::new().unwrap();

    grades(&temp_dir)
        .args(["add", "Ana", "Math", "5"])
        .assert()
        .success();

    grades(&temp_dir)
        .args(["update", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_export_csv_and_json() {
    let temp_dir = TempDir::new().unwrap();

    grades(&temp_dir)
        .args(["add", "Ana", "Math", "9.5"])
        .assert()
        .success();
    grades(&temp_dir)
        .args(["add", "Bruno", "Art", "6"])
        .assert()
        .success();

    grades(&temp_dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 grades to grades.csv"));

    let csv = std::fs::read_to_string(temp_dir.path().join("grades.csv")).unwrap();
    assert_eq!(csv, "ID,Student,Subject,Grade\n1,Ana,Math,9.5\n2,Bruno,Art,6\n");

    grades(&temp_dir)
        .args(["export", "json", "--output", "dump.json"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join("dump.json")).unwrap())
            .unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["student"], "Ana");
    assert_eq!(json[1]["grade"], 6.0);
}

#[test]
fn test_chart() {
    let temp_dir = TempDir::new().unwrap();

    grades(&temp_dir)
        .arg("chart")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No grades recorded"));

    grades(&temp_dir)
        .args(["add", "Ana", "Math", "10"])
        .assert()
        .success();
    grades(&temp_dir)
        .args(["add", "Bruno", "Math", "6"])
        .assert()
        .success();

    grades(&temp_dir)
        .args(["chart", "--average", "--svg", "chart.svg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grades by Subject").and(predicate::str::contains("Math | ")));

    assert!(temp_dir.path().join("chart.svg").exists());
}

#[test]
fn test_db_flag_and_env() {
    let temp_dir = TempDir::new().unwrap();

    grades(&temp_dir)
        .args(["--db", "other.db", "add", "Ana", "Math", "9"])
        .assert()
        .success();
    assert!(temp_dir.path().join("other.db").exists());

    grades(&temp_dir)
        .env("GRADES_DB", "other.db")
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grades:  1"));
}

#[test]
fn test_chart_width_is_bounded() {
    let temp_dir = TempDir::new().unwrap();

    grades(&temp_dir)
        .args(["add", "Ana", "Math", "9"])
        .assert()
        .success();

    grades(&temp_dir)
        .args(["chart", "--width", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));

    grades(&temp_dir)
        .args(["chart", "--width", "0"])
        .assert()
        .failure();

    grades(&temp_dir)
        .args(["chart", "--width", "1000"])
        .assert()
        .success();
}

#[test]
fn test_chart_per_record() {
    let temp_dir = TempDir::new().unwrap();

    grades(&temp_dir)
        .args(["add", "Ana", "Math", "10"])
        .assert()
        .success();
    grades(&temp_dir)
        .args(["add", "Bruno", "Math", "5"])
        .assert()
        .success();

    let output = grades(&temp_dir)
        .args(["chart", "--width", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["Grades by Subject", "Math | ██████████ 10", "Math | █████ 5"]);
}

#[test]
fn test_list_json() {
    let temp_dir = TempDir::new().unwrap();

    grades(&temp_dir)
        .args(["add", "Ana", "Matemática", "9.5"])
        .assert()
        .success();

    let output = grades(&temp_dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["id"], 1);
    assert_eq!(json[0]["subject"], "Matemática");
    assert_eq!(json[0]["grade"], 9.5);
}

#[test]
fn test_update_student_and_subject() {
    let temp_dir = TempDir::new().unwrap();

    grades(&temp_dir)
        .args(["add", "Ana", "Math", "7"])
        .assert()
        .success();

    grades(&temp_dir)
        .args(["update", "1", "--student", "Ana Paula", "--subject", "Physics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Ana Paula / Physics: 7"));

    grades(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Student: Ana Paula")
                .and(predicate::str::contains("Subject: Physics"))
                .and(predicate::str::contains("Grade:   7")),
        );
}

#[test]
fn test_stats_with_huge_grades() {
    let temp_dir = TempDir::new().unwrap();

    for _ in 0..2 {
        grades(&temp_dir)
            .args(["add", "Ana", "Math", "1e308"])
            .assert()
            .success();
    }

    grades(&temp_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("inf").not());
}
