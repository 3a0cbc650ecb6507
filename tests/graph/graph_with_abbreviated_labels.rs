use crate::common::command::{object_writer, read_graph, repository_dir, run_graph_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn graph_with_abbreviated_labels(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let objects = object_writer(repository_dir.path());
    let file = objects.file("a.txt", "a");
    let tree = objects.tree(vec![file]);
    let commit = objects.commit(&tree, &[], "Initial commit");

    run_graph_command(repository_dir.path(), "a.txt", &["--abbrev-commit"])
        .assert()
        .success();

    let dot = read_graph(repository_dir.path());
    assert!(dot.contains(&format!(
        "\"{commit}\" [label=\"{}\"];",
        commit.to_short_oid()
    )));

    Ok(())
}
