use crate::common::command::{object_writer, read_graph, repository_dir, run_graph_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn graph_is_deterministic(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let objects = object_writer(repository_dir.path());
    let mut parents = Vec::new();
    for i in 0..8 {
        let file = objects.file("a.txt", &format!("revision {i}"));
        let tree = objects.tree(vec![file]);
        let parent_refs = parents.iter().collect::<Vec<_>>();
        let commit = objects.commit(&tree, &parent_refs, &format!("Revision {i}"));
        parents = vec![commit];
    }

    run_graph_command(repository_dir.path(), "a.txt", &[])
        .assert()
        .success();
    let first = read_graph(repository_dir.path());

    run_graph_command(repository_dir.path(), "a.txt", &[])
        .assert()
        .success();
    let second = read_graph(repository_dir.path());

    assert_eq!(first, second);

    Ok(())
}
