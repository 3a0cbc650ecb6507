use crate::common::command::{object_writer, repository_dir, run_depviz_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn ls_tree_lists_entries(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let objects = object_writer(repository_dir.path());
    let nested = objects.file("2.txt", "two");
    let dir = objects.dir("a", vec![nested.clone()]);
    let top = objects.file("1.txt", "one");
    let tree = objects.tree(vec![top.clone(), dir.clone()]);
    let commit = objects.commit(&tree, &[], "Initial commit");

    let flat = format!(
        "100644 blob {}\t1.txt\n040000 tree {}\ta\n",
        top.oid, dir.oid
    );
    run_depviz_command(repository_dir.path(), &["ls-tree", commit.as_ref()])
        .assert()
        .success()
        .stdout(predicate::eq(flat.as_str()));

    let recursive = format!(
        "100644 blob {}\t1.txt\n100644 blob {}\ta/2.txt\n",
        top.oid, nested.oid
    );
    run_depviz_command(repository_dir.path(), &["ls-tree", "-r", tree.as_ref()])
        .assert()
        .success()
        .stdout(predicate::eq(recursive.as_str()));

    Ok(())
}
