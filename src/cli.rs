use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sizestat", about = "Report minification and gzip savings of build output")]
pub struct Cli {
    /// Files or directories to measure
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// JSON options file (minifiedName, verbose)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Regex marking minified file names
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub minified_name: Option<String>,

    /// Show progress and debug logging (`--verbose=false` overrides the config file)
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub verbose: Option<bool>,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}
