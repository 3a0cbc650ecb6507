use crate::common::store::ObjectWriter;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::create_dir_all(dir.path().join(".git").join("objects"))
        .expect("Failed to create .git/objects");
    dir
}

pub fn object_writer(dir: &Path) -> ObjectWriter {
    ObjectWriter::new(dir)
}

pub fn run_depviz_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("depviz").expect("Failed to find depviz binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// `depviz graph` against `dir`, writing the graph to `<dir>/graph.dot`.
pub fn run_graph_command(dir: &Path, target: &str, extra: &[&str]) -> Command {
    let repo_path = dir.to_string_lossy().to_string();
    let output = dir.join("graph.dot").to_string_lossy().to_string();

    let mut args = vec!["graph", "-r", repo_path.as_str(), "-f", target, "-o", output.as_str()];
    args.extend_from_slice(extra);

    run_depviz_command(dir, &args)
}

pub fn read_graph(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("graph.dot")).expect("Failed to read graph.dot")
}

pub fn node_lines(dot: &str) -> Vec<&str> {
    dot.lines().filter(|line| line.contains("[label=")).collect()
}

pub fn edge_lines(dot: &str) -> Vec<&str> {
    dot.lines().filter(|line| line.contains("->")).collect()
}
