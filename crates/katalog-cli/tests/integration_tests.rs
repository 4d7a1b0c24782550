//! Integration tests for katalog-cli.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A sandbox with its own empty config file and store path.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        Self { dir }
    }

    fn store(&self) -> PathBuf {
        self.dir.path().join("products.json")
    }

    fn katalog(&self) -> assert_cmd::Command {
        let mut cmd = cargo::cargo_bin_cmd!("katalog");
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.dir.path().join("config.toml"))
            .arg("--store")
            .arg(self.store());
        cmd
    }

    fn add(&self, name: &str, price: &str, discounted: &str) -> assert_cmd::Command {
        let mut cmd = self.katalog();
        cmd.args([
            "add",
            "--name",
            name,
            "--seller",
            "Çiçek Pazarı",
            "--stock",
            "12",
            "--price",
            price,
            "--discounted",
            discounted,
            "--category",
            "Home Goods",
            "--images",
            "https://img.example/one.jpg, https://img.example/two.jpg",
        ]);
        cmd
    }
}

#[test]
fn test_help_flag() {
    cargo::cargo_bin_cmd!("katalog")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version_flag() {
    cargo::cargo_bin_cmd!("katalog")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_add_then_list_shows_pricing() {
    let sb = Sandbox::new();

    sb.add("Vase", "200,00", "150")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 'Vase'"))
        .stdout(predicate::str::contains("150.00 TL"));

    sb.katalog()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vase"))
        .stdout(predicate::str::contains("https://img.example/one.jpg"))
        .stdout(predicate::str::contains("(was 200.00 TL)"))
        .stdout(predicate::str::contains("[%25 OFF]"));
}

#[test]
fn test_store_file_holds_normalized_record() {
    let sb = Sandbox::new();
    sb.add("Mirror", "1250,75", "").assert().success();

    let raw = fs::read_to_string(sb.store()).unwrap();
    let records: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &records[0];

    assert_eq!(record["productName"], "Mirror");
    assert_eq!(record["price"], "1250.75");
    assert!(record.get("discountedPrice").is_none());
    assert!(record["productId"].as_str().unwrap().starts_with("product-"));
}

#[test]
fn test_show_by_id() {
    let sb = Sandbox::new();
    let out = sb
        .add("Clock", "80", "60")
        .args(["--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let saved: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let id = saved["productId"].as_str().unwrap().to_string();

    sb.katalog()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clock"))
        .stdout(predicate::str::contains("Çiçek Pazarı"))
        .stdout(predicate::str::contains("https://img.example/two.jpg"))
        .stdout(predicate::str::contains("[%25 OFF]"));
}

#[test]
fn test_list_json_is_parseable() {
    let sb = Sandbox::new();
    sb.add("Rug", "100", "").assert().success();
    sb.add("Pillow", "50", "45").assert().success();

    let out = sb
        .katalog()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let cards: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let cards = cards.as_array().unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["productName"], "Rug");
    assert_eq!(cards[0]["pricing"]["hasDiscount"], false);
    assert_eq!(cards[1]["pricing"]["discountPercentage"], 10);
}

#[test]
fn test_list_csv_has_header() {
    let sb = Sandbox::new();
    sb.add("Lamp", "120", "").assert().success();

    sb.katalog()
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("product_id,product_name"))
        .stdout(predicate::str::contains(",Lamp,https://img.example/one.jpg,120.00,120.00,0"));
}

#[test]
fn test_empty_list() {
    let sb = Sandbox::new();
    sb.katalog()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No products yet"));
}

#[test]
fn test_corrupt_store_reads_as_empty() {
    let sb = Sandbox::new();
    fs::write(sb.store(), "[{broken").unwrap();

    sb.katalog()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let sb = Sandbox::new();
    sb.add("Bowl", "30", "")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!sb.store().exists());
}

#[test]
fn test_currency_from_environment() {
    let sb = Sandbox::new();
    sb.add("Cup", "9,5", "")
        .env("KATALOG__DISPLAY__CURRENCY", "EUR")
        .assert()
        .success()
        .stdout(predicate::str::contains("9.50 EUR"));
}

#[test]
fn test_config_get() {
    let sb = Sandbox::new();
    sb.katalog()
        .args(["config", "get", "display.currency"])
        .assert()
        .success()
        .stdout(predicate::str::diff("TL\n"));
}

#[test]
fn test_init_writes_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("katalog/config.toml");

    cargo::cargo_bin_cmd!("katalog")
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("currency = \"TL\""));
}

#[test]
fn test_quiet_flag() {
    let sb = Sandbox::new();
    sb.add("Plate", "15", "")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_shell_completions() {
    cargo::cargo_bin_cmd!("katalog")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
