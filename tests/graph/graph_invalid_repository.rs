use crate::common::command::run_depviz_command;
use assert_fs::TempDir;
use predicates::prelude::predicate;

#[test]
fn graph_invalid_repository() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let repo_path = dir.path().to_string_lossy().to_string();

    run_depviz_command(
        dir.path(),
        &["graph", "-r", &repo_path, "-f", "a.txt", "-o", "out.dot"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("repository not found"));

    Ok(())
}

#[test]
fn graph_requires_all_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    run_depviz_command(dir.path(), &["graph", "-f", "a.txt"])
        .assert()
        .failure();

    Ok(())
}
