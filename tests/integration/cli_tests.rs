//! Integration tests for the rbatis-gen CLI.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const USER_DDL: &str =
    "CREATE TABLE user (id int(11) NOT NULL, name varchar(255), create_time datetime);";

fn rbatis_gen() -> Command {
    let mut cmd = Command::cargo_bin("rbatis-gen").unwrap();
    cmd.env_remove("RBATIS_GEN_TARGET").arg("--no-color");
    cmd
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn test_help_shows_all_options() {
    rbatis_gen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--ddl"))
        .stdout(predicate::str::contains("--dialect"))
        .stdout(predicate::str::contains("--print"))
        .stdout(predicate::str::contains("--schema"))
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version() {
    rbatis_gen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_dialect_fails() {
    rbatis_gen()
        .args(["--dialect", "oracle", "--print", "--ddl", USER_DDL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("oracle"));
}

// ============================================================================
// Generation from DDL
// ============================================================================

#[test]
fn test_generates_struct_file() {
    let temp_dir = TempDir::new().unwrap();

    rbatis_gen()
        .arg("--target")
        .arg(temp_dir.path())
        .args(["--ddl", USER_DDL])
        .assert()
        .success()
        .stdout(predicate::str::contains("user.rs"));

    let content = fs::read_to_string(temp_dir.path().join("user.rs")).unwrap();
    assert!(content.contains("pub struct User {"));
    assert!(content.contains(
        "    id: Option<i32>,\n    name: Option<String>,\n    create_time: Option<DateTime>,\n"
    ));
    assert!(content.ends_with("crud!(User{});\n"));
}

#[test]
fn test_target_file_uses_its_directory() {
    let temp_dir = TempDir::new().unwrap();
    let sibling = temp_dir.path().join("mod.rs");
    fs::write(&sibling, "").unwrap();

    rbatis_gen()
        .arg("--target")
        .arg(&sibling)
        .args(["--ddl", USER_DDL])
        .assert()
        .success();

    assert!(temp_dir.path().join("user.rs").exists());
}

#[test]
fn test_target_from_environment() {
    let temp_dir = TempDir::new().unwrap();

    rbatis_gen()
        .env("RBATIS_GEN_TARGET", temp_dir.path())
        .args(["--ddl", USER_DDL])
        .assert()
        .success();

    assert!(temp_dir.path().join("user.rs").exists());
}

#[test]
fn test_ddl_from_stdin() {
    let temp_dir = TempDir::new().unwrap();

    rbatis_gen()
        .arg("--target")
        .arg(temp_dir.path())
        .write_stdin("CREATE TABLE `sys_role` (\n  `role_id` bigint,\n  `role_name` varchar(64)\n);\n")
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("sys_role.rs")).unwrap();
    assert!(content.contains("pub struct SysRole {"));
    assert!(content.contains("    role_id: Option<String>,"));
    assert!(content.contains("crud!(SysRole{});"));
}

#[test]
fn test_existing_file_is_not_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("user.rs");
    fs::write(&existing, "// keep me").unwrap();

    rbatis_gen()
        .arg("--target")
        .arg(temp_dir.path())
        .args(["--ddl", USER_DDL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("user.rs already exists"));

    assert_eq!(fs::read_to_string(&existing).unwrap(), "// keep me");
}

#[test]
fn test_empty_ddl_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();

    rbatis_gen()
        .arg("--target")
        .arg(temp_dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse DDL failed"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_non_create_statement_fails() {
    let temp_dir = TempDir::new().unwrap();

    rbatis_gen()
        .arg("--target")
        .arg(temp_dir.path())
        .args(["--ddl", "DROP TABLE user;"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse DDL failed"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_target_fails() {
    rbatis_gen()
        .args(["--ddl", USER_DDL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("select a file or folder"));
}

#[test]
fn test_nonexistent_target_fails() {
    rbatis_gen()
        .args(["--target", "/nonexistent/path/that/does/not/exist"])
        .args(["--ddl", USER_DDL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

// ============================================================================
// Printing modes
// ============================================================================

#[test]
fn test_print_writes_to_stdout_only() {
    let temp_dir = TempDir::new().unwrap();

    rbatis_gen()
        .arg("--target")
        .arg(temp_dir.path())
        .args(["--print", "--ddl", USER_DDL])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("use rbatis::crud;"))
        .stdout(predicate::str::contains("crud!(User{});"));

    assert!(!temp_dir.path().join("user.rs").exists());
}

#[test]
fn test_print_keeps_column_order() {
    let output = rbatis_gen()
        .args(["--print", "--ddl", "CREATE TABLE t (zeta int, alpha varchar(8), mid timestamp);"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let zeta = stdout.find("zeta:").unwrap();
    let alpha = stdout.find("alpha:").unwrap();
    let mid = stdout.find("mid:").unwrap();
    assert!(zeta < alpha && alpha < mid);
}

#[test]
fn test_schema_prints_compact_json() {
    rbatis_gen()
        .args(["--schema", "--ddl", USER_DDL])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"user\""))
        .stdout(predicate::str::contains("\"datatype\": \"varchar\""));
}

#[test]
fn test_postgres_dialect() {
    rbatis_gen()
        .args(["--print", "--dialect", "postgres"])
        .args(["--ddl", "CREATE TABLE audit_log (id integer, logged_at timestamp with time zone);"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pub struct AuditLog {"))
        .stdout(predicate::str::contains("    id: Option<i32>,"))
        .stdout(predicate::str::contains("    logged_at: Option<DateTime>,"));
}

// ============================================================================
// Generation from a JSON sample
// ============================================================================

#[test]
fn test_generates_struct_from_json_sample() {
    let temp_dir = TempDir::new().unwrap();

    rbatis_gen()
        .arg("--target")
        .arg(temp_dir.path())
        .args(["--name", "order_item", "--json", r#"{"sku":"A-1","qty":2,"gift":true}"#])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("order_item.rs")).unwrap();
    assert!(content.contains(
        "pub struct OrderItem {\n    sku: Option<String>,\n    qty: Option<i64>,\n    gift: Option<bool>,\n}"
    ));
}

#[test]
fn test_json_requires_name() {
    rbatis_gen()
        .args(["--print", "--json", "{}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_invalid_json_sample_fails() {
    rbatis_gen()
        .args(["--print", "--name", "user", "--json", "[1,2]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON sample"));
}
