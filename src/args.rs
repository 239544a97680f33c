use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "registra")]
#[command(about = "Interactive course catalog manager", long_about = None)]
pub struct Cli {
    /// Directory holding the course catalog (defaults to the platform data dir)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep the catalog in memory only; nothing is persisted
    #[arg(long)]
    pub ephemeral: bool,
}
