//! End-to-end tests for the menu-find binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "products": [
        {"id": 1, "name": "Бургер XXXL", "description": "Двойная котлета", "category_id": 1, "price": 450},
        {"id": 2, "name": "Фирменный бургер", "description": "Сочная котлета", "category_id": 1, "price": 390},
        {"id": 3, "name": "Картофель фри", "category_id": 2, "price": 150},
        {"id": 4, "name": "Сербский соус", "description": "Острый", "category_id": 3, "price": 60}
    ],
    "categories": [
        {"id": 1, "name": "Бургеры"},
        {"id": 2, "name": "Закуски"},
        {"id": 3, "name": "Соусы"}
    ]
}"#;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("menu.json"), CATALOG).unwrap();
    dir
}

fn menu_find(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("menu-find").unwrap();
    cmd.current_dir(dir)
        .env_remove("MENU_CATALOG")
        .env_remove("RUST_LOG");
    cmd
}

fn ids(stdout: &[u8]) -> Vec<i64> {
    let value: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry.get("item").unwrap_or(entry)["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn search_tolerates_typo() {
    let dir = workspace();
    menu_find(dir.path())
        .args(["search", "бургр", "--catalog", "menu.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Бургер XXXL"))
        .stdout(predicate::str::contains("Фирменный бургер"))
        .stdout(predicate::str::contains("Картофель").not());
}

#[test]
fn search_json_reports_items_in_catalog_order() {
    let dir = workspace();
    let output = menu_find(dir.path())
        .args(["search", "бургр", "--catalog", "menu.json", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(ids(&output.stdout), vec![1, 2]);
}

#[test]
fn search_rank_puts_best_match_first() {
    let dir = workspace();
    let output = menu_find(dir.path())
        .args(["search", "фирменный бургер", "--catalog", "menu.json", "--rank", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(ids(&output.stdout)[0], 2);
}

#[test]
fn search_catalog_from_env() {
    let dir = workspace();
    menu_find(dir.path())
        .env("MENU_CATALOG", "menu.json")
        .args(["search", "соус"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Сербский соус"));
}

#[test]
fn search_without_matches_hints_on_stderr() {
    let dir = workspace();
    menu_find(dir.path())
        .args(["search", "пицца", "--catalog", "menu.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No products match"));
}

#[test]
fn search_categories() {
    let dir = workspace();
    menu_find(dir.path())
        .args(["search", "соусы", "--catalog", "menu.json", "--categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Соусы"))
        .stdout(predicate::str::contains("Закуски").not());
}

#[test]
fn search_json_scores_description_match() {
    let dir = workspace();
    let output = menu_find(dir.path())
        .args(["search", "острый", "--catalog", "menu.json", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["item"]["id"], 4);
    assert_eq!(value[0]["score"], 50);
}

#[test]
fn search_categories_by_single_field() {
    let dir = workspace();
    menu_find(dir.path())
        .args(["search", "соусы", "--catalog", "menu.json", "--categories", "-f", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Соусы"));

    menu_find(dir.path())
        .args(["search", "соусы", "--catalog", "menu.json", "--categories", "-f", "description", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));

    menu_find(dir.path())
        .args(["search", "соусы", "--catalog", "menu.json", "--categories", "-f", "price"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field"));
}

#[test]
fn search_rejects_unknown_field() {
    let dir = workspace();
    menu_find(dir.path())
        .args(["search", "бургер", "--catalog", "menu.json", "-f", "price"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field"));
}

#[test]
fn suggest_corrects_typo() {
    let dir = workspace();
    menu_find(dir.path())
        .args(["suggest", "бургр", "--catalog", "menu.json"])
        .assert()
        .success()
        .stdout("бургер\n");
}

#[test]
fn recommend_prefers_category_then_price() {
    let dir = workspace();
    let output = menu_find(dir.path())
        .args(["recommend", "1", "--catalog", "menu.json", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(ids(&output.stdout), vec![2, 3, 4]);
}

#[test]
fn recommend_unknown_product_fails() {
    let dir = workspace();
    menu_find(dir.path())
        .args(["recommend", "99", "--catalog", "menu.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No product with id 99"));
}

#[test]
fn config_file_is_discovered() {
    let dir = workspace();
    std::fs::write(dir.path().join("menu-search.toml"), "[recommendations]\nmax = 1\n").unwrap();
    let output = menu_find(dir.path())
        .args(["recommend", "1", "--catalog", "menu.json", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(ids(&output.stdout), vec![2]);
}

#[test]
fn invalid_config_fails() {
    let dir = workspace();
    std::fs::write(dir.path().join("custom.toml"), "[search]\nfields = []\n").unwrap();
    menu_find(dir.path())
        .args(["--config", "custom.toml", "normalize", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config file"));
}

#[test]
fn broken_catalog_fails() {
    let dir = workspace();
    std::fs::write(dir.path().join("broken.json"), "{\"products\": [").unwrap();
    menu_find(dir.path())
        .args(["search", "бургер", "--catalog", "broken.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn normalize_and_distance_helpers() {
    let dir = workspace();
    menu_find(dir.path())
        .args(["normalize", "Crème Brûlée!"])
        .assert()
        .success()
        .stdout("creme brulee\n");

    menu_find(dir.path())
        .args(["distance", "Бургер", "бургр"])
        .assert()
        .success()
        .stdout("1\n");
}
