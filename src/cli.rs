use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "missing-redirects",
    version,
    about = "List doc sub-paths that may need a redirect after deletion"
)]
pub struct Cli {
    /// File listing deleted documentation paths, one per line.
    pub del_paths: PathBuf,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}
