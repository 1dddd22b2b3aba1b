use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use revstatic::core::{revision_documents, RevstaticOptions};

#[derive(Parser)]
#[command(
    name = "revstatic",
    version,
    about = "Rewrites HTML asset references to content-hashed filenames"
)]
struct Cli {
    /// HTML documents to analyze and rewrite; relative paths resolve
    /// against the root directory
    #[arg(required = true)]
    documents: Vec<PathBuf>,

    /// Directory that root-relative references resolve against
    /// [default: the current directory]
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Character encoding used to read and write documents
    #[arg(short, long)]
    encoding: Option<String>,

    /// Analyze without writing documents or hashed copies
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Rewrite documents but skip writing hashed asset copies
    #[arg(long)]
    no_copy: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    silent: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let options = RevstaticOptions {
        root: cli.root,
        encoding: cli.encoding,
        dry_run: cli.dry_run,
        no_copy: cli.no_copy,
        silent: cli.silent,
    };

    match revision_documents(&options, &cli.documents) {
        Ok(summary) => {
            if !options.silent {
                println!(
                    "{} document(s) rewritten, {} asset(s) hashed, {} dependency edge(s)",
                    summary.documents, summary.assets, summary.edges
                );
            }
        }
        Err(error) => {
            eprintln!("revstatic: {error}");
            process::exit(1);
        }
    }
}
