//! Integration tests for the CLI surface: help, version, argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn ebver() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ebver"));
    cmd.env("NO_COLOR", "1");
    for var in [
        "TF_VAR_aws_region",
        "TF_VAR_elastic_beanstalk_s3_bucket",
        "TF_VAR_elastic_beanstalk_s3_key",
        "TF_VAR_elastic_beanstalk_application_name",
        "TF_VAR_elastic_beanstalk_application_version",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    ebver().assert().code(2).stderr(predicate::str::contains(
        "Upload and register Elastic Beanstalk application versions",
    ));
}

#[test]
fn test_cli_help_flag_shows_help() {
    ebver()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_create_help_lists_env_vars() {
    ebver()
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TF_VAR_elastic_beanstalk_s3_bucket"))
        .stdout(predicate::str::contains("--bundle-file"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    ebver()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ebver"));
}

#[test]
fn test_version_command_shows_version() {
    ebver()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ebver 0.1.0"));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let output = ebver()
        .args(["version", "--json"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["version"], "0.1.0");
}

#[test]
fn test_no_color_env_with_any_value_is_accepted() {
    for value in ["1", "true", "yes", ""] {
        ebver()
            .arg("version")
            .env("NO_COLOR", value)
            .assert()
            .success()
            .stdout(predicate::str::contains("ebver 0.1.0"));
    }
}

#[test]
fn test_no_color_flag_is_accepted_after_subcommand() {
    ebver()
        .args(["version", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ebver 0.1.0"));
}

// --- Argument errors ---

#[test]
fn test_unknown_command_is_usage_error() {
    ebver()
        .arg("deploy")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_create_without_configuration_is_usage_error() {
    ebver()
        .arg("create")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--region"));
}

#[test]
fn test_check_with_one_missing_env_var_names_it() {
    ebver()
        .arg("check")
        .env("TF_VAR_aws_region", "eu-west-1")
        .env("TF_VAR_elastic_beanstalk_s3_bucket", "releases")
        .env("TF_VAR_elastic_beanstalk_s3_key", "myapp/1.4.2.zip")
        .env("TF_VAR_elastic_beanstalk_application_name", "myapp")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--version-label"));
}
