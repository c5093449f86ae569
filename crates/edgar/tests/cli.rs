use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use std::process::Command;

const API_MODULE: &str = "\
def get_user(user_id) -> User:
    \"\"\"Fetch a user by id.\"\"\"
    return db.lookup(user_id)

def post_user(payload):
    \"\"\"Create a user from a payload.\"\"\"
    return db.insert(payload)

def internal_helper(x):
    return x
";

fn edgar_cmd() -> Command {
  Command::cargo_bin("edgar").expect("binary exists")
}

#[test]
fn test_markdown_output() {
  let temp = assert_fs::TempDir::new().unwrap();
  let file = temp.child("api.py");
  file.write_str(API_MODULE).unwrap();

  edgar_cmd()
    .arg(file.path())
    .assert()
    .success()
    .stdout(
      contains("# API Documentation")
        .and(contains("## get_user"))
        .and(contains("Fetch a user by id."))
        .and(contains("**Returns**: User"))
        .and(contains("## post_user"))
        .and(contains("internal_helper").not()),
    );

  temp.close().unwrap();
}

#[test]
fn test_json_output() {
  let temp = assert_fs::TempDir::new().unwrap();
  let file = temp.child("api.py");
  file.write_str(API_MODULE).unwrap();

  let output = edgar_cmd().arg("--json").arg(file.path()).assert().success();

  let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
  let endpoints: serde_json::Value = serde_json::from_str(&stdout).unwrap();

  assert_eq!(endpoints.as_array().unwrap().len(), 2);
  assert_eq!(endpoints[0]["name"], "get_user");
  assert_eq!(endpoints[0]["params"][0], "user_id");
  assert_eq!(endpoints[1]["returns"], "Any");

  temp.close().unwrap();
}

#[test]
fn test_missing_file() {
  edgar_cmd().arg("missing.py").assert().failure().stderr(contains("cannot read"));
}
