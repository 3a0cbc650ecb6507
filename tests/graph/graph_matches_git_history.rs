use crate::common::command::{edge_lines, node_lines, read_graph, run_graph_command};
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::Command;

fn git(dir: &Path, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = Command::new("git")
        .current_dir(dir)
        .args(["-c", "gc.auto=0", "-c", "commit.gpgsign=false"])
        .args(args)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_AUTHOR_NAME", "John Doe")
        .env("GIT_AUTHOR_EMAIL", "johndoe@example.com")
        .env("GIT_COMMITTER_NAME", "John Doe")
        .env("GIT_COMMITTER_EMAIL", "johndoe@example.com")
        .output()?;

    if !output.status.success() {
        return Err(format!(
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }

    Ok(String::from_utf8(output.stdout)?.trim_ascii().to_string())
}

#[test]
fn graph_matches_git_history() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    git(dir.path(), &["init", "-q"])?;

    dir.child("src/lib.rs").write_str("pub fn one() {}\n")?;
    dir.child("README").write_str("readme\n")?;
    git(dir.path(), &["add", "."])?;
    git(dir.path(), &["commit", "-q", "-m", "Initial commit"])?;

    git(dir.path(), &["checkout", "-q", "-b", "feature"])?;
    dir.child("src/lib.rs").write_str("pub fn one() {}\npub fn two() {}\n")?;
    git(dir.path(), &["commit", "-q", "-am", "Add two"])?;

    git(dir.path(), &["checkout", "-q", "-"])?;
    dir.child("README").write_str("readme\nmore\n")?;
    git(dir.path(), &["commit", "-q", "-am", "Extend readme"])?;
    git(dir.path(), &["merge", "-q", "--no-ff", "-m", "Merge feature", "feature"])?;

    run_graph_command(dir.path(), "src/lib.rs", &[])
        .assert()
        .success();

    // every commit has src/lib.rs, so the graph is the whole history
    let mut expected_nodes = Vec::new();
    let mut expected_edges = Vec::new();
    for line in git(dir.path(), &["rev-list", "--parents", "--all"])?.lines() {
        let mut ids = line.split_whitespace();
        let Some(commit) = ids.next() else { continue };
        expected_nodes.push(format!("    \"{commit}\" [label=\"{commit}\"];"));
        for parent in ids {
            expected_edges.push(format!("    \"{commit}\" -> \"{parent}\";"));
        }
    }
    expected_nodes.sort();
    expected_edges.sort();

    let dot = read_graph(dir.path());
    let mut nodes = node_lines(&dot);
    nodes.sort();
    let mut edges = edge_lines(&dot);
    edges.sort();

    assert_eq!(nodes.len(), 4);
    assert_eq!(edges.len(), 4);
    assert_eq!(nodes, expected_nodes);
    assert_eq!(edges, expected_edges);

    Ok(())
}
