use crate::areas::repository::Repository;
use crate::artifacts::database::database_error::DatabaseError;
use crate::artifacts::graph::dependency_graph::DependencyGraph;
use crate::artifacts::graph::graphviz::{Graphviz, RenderOptions};
use crate::artifacts::log::commit_finder::{CommitFinder, CommitScan, ScanPolicy};
use crate::artifacts::log::target_file::TargetFile;
use anyhow::Context;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub target: TargetFile,
    pub output: PathBuf,
    pub policy: ScanPolicy,
    pub render: RenderOptions,
}

impl Repository {
    /// Scan every stored commit for the target and build the ancestry graph
    /// of those that contain it.
    pub fn dependency_graph(
        &self,
        target: &TargetFile,
        policy: ScanPolicy,
    ) -> Result<(CommitScan, DependencyGraph), DatabaseError> {
        let scan = CommitFinder::new(self.database(), policy).find(target)?;
        let graph = DependencyGraph::from_commits(&scan.commits);

        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            skipped = scan.skipped.len(),
            "built dependency graph"
        );

        Ok((scan, graph))
    }

    pub fn graph(&self, opts: &GraphOptions) -> anyhow::Result<()> {
        let (scan, graph) = self
            .dependency_graph(&opts.target, opts.policy)
            .with_context(|| format!("Unable to scan commits for '{}'", opts.target))?;

        if !scan.skipped.is_empty() {
            writeln!(
                self.writer(),
                "{}",
                format!("Skipped {} unreadable object(s):", scan.skipped.len()).yellow()
            )?;
            for skipped in &scan.skipped {
                writeln!(self.writer(), "  {} ({})", skipped.oid, skipped.error)?;
            }
        }

        if graph.is_empty() {
            writeln!(
                self.writer(),
                "No commits containing '{}' were found.",
                opts.target
            )?;
            return Ok(());
        }

        let dot = Graphviz::new(opts.render).render(&graph);

        std::fs::write(&opts.output, &dot).with_context(|| {
            format!(
                "Unable to write Graphviz code to '{}'",
                opts.output.display()
            )
        })?;

        writeln!(
            self.writer(),
            "{}",
            format!("Graphviz code written to '{}'.", opts.output.display()).green()
        )?;
        writeln!(self.writer(), "\nGenerated Graphviz code:\n")?;
        writeln!(self.writer(), "{dot}")?;

        Ok(())
    }
}
