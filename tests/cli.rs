use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn jira2branch_without_args_prints_usage() {
    Command::cargo_bin("jira2branch")
        .unwrap()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: jira2branch"))
        .stdout(predicate::str::contains("ABC-1234"));
}

#[test]
fn jira2branch_with_extra_args_prints_usage() {
    Command::cargo_bin("jira2branch")
        .unwrap()
        .args(["ABC-1234", "ABC-5678"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: jira2branch"));
}

#[test]
fn azure2branch_without_args_prints_usage() {
    Command::cargo_bin("azure2branch")
        .unwrap()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: azure2branch"))
        .stdout(predicate::str::contains("12345"));
}

// With no server configured the lookup fails before any network call, which
// exercises the fetch-failure exit path end to end.
#[test]
fn jira2branch_reports_missing_config_as_error() {
    Command::cargo_bin("jira2branch")
        .unwrap()
        .env_remove("JIRA_SERVER_URL")
        .env_remove("JIRA_PAT_TOKEN")
        .arg("ABC-1234")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error: "))
        .stdout(predicate::str::contains("Jira server URL not configured"));
}

#[test]
fn azure2branch_reports_missing_config_as_error() {
    Command::cargo_bin("azure2branch")
        .unwrap()
        .env_remove("AZURE_DEVOPS_ORGANIZATION_URL")
        .env_remove("AZURE_PAT_TOKEN")
        .arg("12345")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error: "))
        .stdout(predicate::str::contains("organization URL not configured"));
}

#[test]
fn azure2branch_rejects_non_numeric_work_item_id() {
    Command::cargo_bin("azure2branch")
        .unwrap()
        .arg("ABC-1234")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error: "))
        .stdout(predicate::str::contains("must be numeric"));
}
