use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "facet",
    about = "Browse a JSON dataset through list facets",
    version
)]
pub struct Cli {
    /// JSON file holding an array of row objects.
    #[arg(long)]
    pub data: PathBuf,

    /// Column to facet on; repeat for several. Defaults to every column.
    #[arg(long = "column")]
    pub columns: Vec<String>,

    /// Visible choice rows per facet.
    #[arg(long = "body-height")]
    pub body_height: Option<u16>,

    #[arg(long = "log-level", default_value = "info")]
    pub log_level: LevelFilter,

    /// Log file; defaults to `facet.log` in the user cache directory.
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}
