use anyhow::Result;
use clap::{Parser, Subcommand};
use depviz::areas::repository::Repository;
use depviz::artifacts::graph::graphviz::RenderOptions;
use depviz::artifacts::log::commit_finder::ScanPolicy;
use depviz::artifacts::log::target_file::TargetFile;
use depviz::commands::plumbing::cat_file::CatFileMode;
use depviz::commands::porcelain::graph::GraphOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "depviz",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Visualize the commit ancestry of a file in a git repository",
    long_about = "This tool reads the loose objects of a git repository, finds every commit \
    whose tree contains a given file and writes the ancestry of those commits as Graphviz code.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "graph",
        about = "Write the dependency graph of the commits containing a file",
        long_about = "This command scans every commit of the repository, keeps those whose tree \
        contains the target file and writes their commit -> parent edges as Graphviz code."
    )]
    Graph {
        #[arg(short = 'r', long, help = "The path to the git repository")]
        repo_path: PathBuf,
        #[arg(
            short = 'f',
            long,
            help = "The file name (any depth) or path (from the root) to look for"
        )]
        target_file: String,
        #[arg(short = 'o', long, help = "Where to write the Graphviz code")]
        output_file: PathBuf,
        #[arg(long, help = "Skip unreadable objects instead of aborting")]
        skip_corrupt: bool,
        #[arg(long, help = "Label nodes with abbreviated commit ids")]
        abbrev_commit: bool,
        #[arg(long, help = "Treat a wrong declared object size as corruption")]
        strict_size: bool,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the type, size or content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', help = "Pretty-print the object content")]
        pretty: bool,
        #[arg(short = 't', help = "Print the object type")]
        show_type: bool,
        #[arg(short = 's', help = "Print the object size")]
        show_size: bool,
        #[arg(index = 1, help = "The object SHA, full or abbreviated")]
        sha: String,
        #[arg(short = 'r', long, help = "The path to the git repository")]
        repo_path: Option<PathBuf>,
    },
    #[command(
        name = "ls-tree",
        about = "List the contents of a tree object",
        long_about = "This command lists the entries of a tree, or of the tree of a commit."
    )]
    LsTree {
        #[arg(index = 1, help = "The tree or commit SHA, full or abbreviated")]
        sha: String,
        #[arg(short = 'r', long, help = "Recurse into subtrees")]
        recursive: bool,
        #[arg(long, help = "The path to the git repository")]
        repo_path: Option<PathBuf>,
    },
}

fn open_repository(repo_path: Option<&PathBuf>) -> Result<Repository> {
    let path = match repo_path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    Repository::new(&path, Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Graph {
            repo_path,
            target_file,
            output_file,
            skip_corrupt,
            abbrev_commit,
            strict_size,
        } => {
            let repository = open_repository(Some(repo_path))?.with_size_check(*strict_size);
            let opts = GraphOptions {
                target: TargetFile::parse(target_file)?,
                output: output_file.clone(),
                policy: if *skip_corrupt {
                    ScanPolicy::Skip
                } else {
                    ScanPolicy::Abort
                },
                render: RenderOptions::new(*abbrev_commit),
            };

            repository.graph(&opts)?
        }
        Commands::CatFile {
            pretty: _,
            show_type,
            show_size,
            sha,
            repo_path,
        } => {
            let repository = open_repository(repo_path.as_ref())?;
            let mode = if *show_type {
                CatFileMode::Type
            } else if *show_size {
                CatFileMode::Size
            } else {
                CatFileMode::Pretty
            };

            repository.cat_file(sha, mode)?
        }
        Commands::LsTree {
            sha,
            recursive,
            repo_path,
        } => {
            let repository = open_repository(repo_path.as_ref())?;

            repository.ls_tree(sha, *recursive)?
        }
    }

    Ok(())
}
