use crate::common::command::{object_writer, repository_dir, run_graph_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn graph_empty_object_store(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_graph_command(repository_dir.path(), "a.txt", &[])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No commits containing 'a.txt' were found.",
        ));

    assert!(!repository_dir.path().join("graph.dot").exists());

    Ok(())
}

#[rstest]
fn graph_no_commit_touches_file(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let objects = object_writer(repository_dir.path());
    let file = objects.file("b.txt", "b");
    let tree = objects.tree(vec![file]);
    objects.commit(&tree, &[], "Only b");

    run_graph_command(repository_dir.path(), "a.txt", &[])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No commits containing 'a.txt' were found.",
        ));

    assert!(!repository_dir.path().join("graph.dot").exists());

    Ok(())
}
