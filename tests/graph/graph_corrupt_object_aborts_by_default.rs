use crate::common::command::{object_writer, repository_dir, run_graph_command};
use assert_fs::TempDir;
use depviz::artifacts::objects::object_id::ObjectId;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn graph_corrupt_object_aborts_by_default(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let objects = object_writer(repository_dir.path());
    let file = objects.file("a.txt", "a");
    let tree = objects.tree(vec![file]);
    objects.commit(&tree, &[], "Good commit");

    let broken = ObjectId::try_parse("0123456789abcdef0123456789abcdef01234567".to_string())?;
    objects.write_compressed(&broken, b"this is not zlib data");

    run_graph_command(repository_dir.path(), "a.txt", &[])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt object"))
        .stderr(predicate::str::contains(broken.as_ref()));

    assert!(!repository_dir.path().join("graph.dot").exists());

    Ok(())
}
