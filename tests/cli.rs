//! CLI integration tests for the `--print` surface.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn deptview() -> Command {
    Command::cargo_bin("deptview").unwrap()
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn numbered_records(n: usize) -> String {
    let rows: Vec<String> = (1..=n)
        .map(|i| format!(r#"{{"sno": {i}, "name": "Company {i}", "year": "2024"}}"#))
        .collect();
    format!("[{}]", rows.join(","))
}

const RECRUITERS: &str = r#"{
    "recruiters": [
        {"name": "Amazon", "package": "12 LPA", "year": "2024"},
        {"name": "Wipro", "package": "4 LPA", "year": "2023"}
    ],
    "stats": [
        {"branch": "CSE", "placed": 120}
    ]
}"#;

#[test]
fn prints_last_page_status() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "recruiters.json", &numbered_records(25));

    deptview()
        .arg(&path)
        .args(["--print", "--page-number", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 3 of 3 (25 total entries)"))
        .stdout(predicate::str::contains("Company 21"))
        .stdout(predicate::str::contains("Company 25"))
        .stdout(predicate::str::contains("Company 20").not());
}

#[test]
fn page_number_past_end_shows_last_page() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "recruiters.json", &numbered_records(25));

    deptview()
        .arg(&path)
        .args(["--print", "--page-number", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 3 of 3 (25 total entries)"));
}

#[test]
fn search_filters_rows() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "placements.json", RECRUITERS);

    deptview()
        .arg(&path)
        .args(["--print", "--search", "amazon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Categories: [recruiters] stats"))
        .stdout(predicate::str::contains("Amazon"))
        .stdout(predicate::str::contains("Wipro").not())
        .stdout(predicate::str::contains("Page 1 of 1 (1 total entries)"));
}

#[test]
fn year_filter_narrows_rows() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "placements.json", RECRUITERS);

    deptview()
        .arg(&path)
        .args(["--print", "--year", "2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Year: 2023"))
        .stdout(predicate::str::contains("Wipro"))
        .stdout(predicate::str::contains("Amazon").not());
}

#[test]
fn category_flag_selects_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "placements.json", RECRUITERS);

    deptview()
        .arg(&path)
        .args(["--category", "stats", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Categories: recruiters [stats]"))
        .stdout(predicate::str::contains("BRANCH"))
        .stdout(predicate::str::contains("120"));
}

#[test]
fn date_sort_descending() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "events.json",
        r#"[
            {"title": "Hackathon", "eventDate": "05-03-2023"},
            {"title": "Workshop", "eventDate": "20-11-2024"},
            {"title": "Seminar", "eventDate": "01-01-2022"}
        ]"#,
    );

    let output = deptview()
        .arg(&path)
        .args(["--print", "--sort", "eventDate:desc"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let workshop = stdout.find("Workshop").unwrap();
    let hackathon = stdout.find("Hackathon").unwrap();
    let seminar = stdout.find("Seminar").unwrap();
    assert!(workshop < hackathon && hackathon < seminar);
    assert!(stdout.contains("EVENT DATE ▼"));
}

#[test]
fn manifest_routes_and_columns() {
    let dir = TempDir::new().unwrap();
    write(&dir, "faculty.json", r#"[{"name": "Dr. Rao", "designation": "Professor"}]"#);
    let manifest = write(
        &dir,
        "site.json",
        r#"{
            "name": "CSE",
            "pages": [
                {"route": "placements", "title": "Placements", "source": "placements.json"},
                {
                    "route": "faculty",
                    "title": "Faculty",
                    "description": "Teaching staff",
                    "source": "faculty.json",
                    "columns": [{"key": "designation", "label": "ROLE"}, {"key": "name"}]
                }
            ]
        }"#,
    );
    write(&dir, "placements.json", RECRUITERS);

    deptview()
        .arg(&manifest)
        .args(["--page", "faculty", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Faculty\nTeaching staff\n"))
        .stdout(predicate::str::contains("ROLE      | NAME"))
        .stdout(predicate::str::contains("Professor | Dr. Rao"));
}

#[test]
fn unknown_page_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "placements.json", RECRUITERS);

    deptview()
        .arg(&path)
        .args(["--page", "events", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page not found: events"));
}

#[test]
fn unknown_category_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "placements.json", RECRUITERS);

    deptview()
        .arg(&path)
        .args(["--category", "alumni", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("alumni"));
}

#[test]
fn missing_file_fails() {
    deptview()
        .args(["does-not-exist.json", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn non_object_rows_fail() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.json", r#"[{"name": "ok"}, 42]"#);

    deptview()
        .arg(&path)
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not an object"));
}

#[test]
fn filters_require_print() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "placements.json", RECRUITERS);

    deptview()
        .arg(&path)
        .args(["--search", "amazon"])
        .assert()
        .failure();
}
