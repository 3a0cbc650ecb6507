use crate::common::command::{
    edge_lines, node_lines, object_writer, read_graph, repository_dir, run_graph_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn graph_linear_history(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    // C3 -> C2 -> C1, every commit contains a.txt
    let objects = object_writer(repository_dir.path());
    let v1 = objects.file("a.txt", "one");
    let t1 = objects.tree(vec![v1]);
    let c1 = objects.commit(&t1, &[], "Add a.txt");

    let v2 = objects.file("a.txt", "two");
    let t2 = objects.tree(vec![v2]);
    let c2 = objects.commit(&t2, &[&c1], "Change a.txt");

    let v3 = objects.file("a.txt", "three");
    let other = objects.file("b.txt", "other");
    let t3 = objects.tree(vec![v3, other]);
    let c3 = objects.commit(&t3, &[&c2], "Change a.txt again");

    run_graph_command(repository_dir.path(), "a.txt", &[])
        .assert()
        .success();

    let dot = read_graph(repository_dir.path());
    assert_eq!(node_lines(&dot).len(), 3);

    let mut edges = edge_lines(&dot)
        .into_iter()
        .map(str::trim)
        .map(str::to_string)
        .collect::<Vec<_>>();
    edges.sort();
    let mut expected = vec![
        format!("\"{c3}\" -> \"{c2}\";"),
        format!("\"{c2}\" -> \"{c1}\";"),
    ];
    expected.sort();
    assert_eq!(edges, expected);

    // nodes are listed in ascending id order
    let mut ids = [c1, c2, c3];
    ids.sort();
    let nodes = node_lines(&dot);
    for (line, id) in nodes.iter().zip(ids.iter()) {
        assert!(line.contains(id.as_ref()), "{line} should mention {id}");
    }

    Ok(())
}
