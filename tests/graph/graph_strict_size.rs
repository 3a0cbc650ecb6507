use crate::common::command::{
    node_lines, object_writer, read_graph, repository_dir, run_graph_command,
};
use assert_fs::TempDir;
use depviz::artifacts::objects::commit::Commit;
use depviz::artifacts::objects::object::Packable;
use depviz::artifacts::objects::object_id::ObjectId;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn graph_strict_size(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    // header declares more bytes than the payload holds
    let objects = object_writer(repository_dir.path());
    let file = objects.file("a.txt", "a");
    let tree = objects.tree(vec![file]);
    let payload = Commit::new(tree, vec![], vec![], "Sized\n".to_string()).serialize();
    let mut body = format!("commit {}\0", payload.len() + 5).into_bytes();
    body.extend_from_slice(&payload);
    let commit = ObjectId::try_parse("abcdef0123456789abcdef0123456789abcdef01".to_string())?;
    objects.write_loose(&commit, &body);

    run_graph_command(repository_dir.path(), "a.txt", &[])
        .assert()
        .success();
    let dot = read_graph(repository_dir.path());
    assert_eq!(node_lines(&dot).len(), 1);
    assert!(dot.contains(commit.as_ref()));

    std::fs::remove_file(repository_dir.path().join("graph.dot"))?;

    run_graph_command(repository_dir.path(), "a.txt", &["--strict-size"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("size mismatch"))
        .stderr(predicate::str::contains(commit.as_ref()));

    assert!(!repository_dir.path().join("graph.dot").exists());

    Ok(())
}
