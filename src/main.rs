use anyhow::Result;
use bit::areas::repository::Repository;
use bit::commands::plumbing::cat_file::CatFileMode;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A simple git object reader",
    long_about = "This is a small git plumbing tool, written in Rust. \
    It reads loose objects straight from a repository's object database.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "GIT_DIR",
        default_value = ".git",
        help = "Path to the repository metadata directory"
    )]
    git_dir: PathBuf,
    #[arg(
        long,
        global = true,
        env = "GIT_OBJECT_DIRECTORY",
        help = "Path to the object database (defaults to <git-dir>/objects)"
    )]
    object_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "cat-file",
        about = "Print the content, type or size of an object",
        long_about = "This command reads a loose object from the repository. \
        It requires the full 40-character SHA of the object to be specified.",
        override_usage = "bit cat-file (-p | -t | -s) <SHA>",
        group(ArgGroup::new("mode").required(true).args(["pretty", "kind", "size"]))
    )]
    CatFile {
        #[arg(short = 'p', help = "Pretty-print the object content")]
        pretty: bool,
        #[arg(short = 't', help = "Show the object type")]
        kind: bool,
        #[arg(short = 's', help = "Show the object size")]
        size: bool,
        #[arg(index = 1, help = "The object SHA to read")]
        sha: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::CatFile {
            pretty: _,
            kind,
            size,
            sha,
        } => {
            let mode = if *kind {
                CatFileMode::Type
            } else if *size {
                CatFileMode::Size
            } else {
                CatFileMode::Pretty
            };

            let mut repository = Repository::new(
                cli.git_dir.clone(),
                cli.object_dir.clone(),
                Box::new(std::io::stdout()),
            );

            repository.cat_file(sha, mode)?
        }
    }

    Ok(())
}
