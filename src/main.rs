use clap::Parser;
use directories::ProjectDirs;
use registra::api::RegistraApi;
use registra::config::RegistraConfig;
use registra::controller::Controller;
use registra::error::{RegistraError, Result};
use registra::store::fs::FileStore;
use registra::store::memory::InMemoryStore;
use registra::view::console::ConsoleView;
use std::io;
use std::path::PathBuf;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let view = ConsoleView::new(io::stdin().lock(), io::stdout());

    if cli.ephemeral {
        Controller::new(RegistraApi::new(InMemoryStore::new()), view).run();
        return Ok(());
    }

    let data_dir = resolve_data_dir(&cli)?;
    let config = RegistraConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir).with_data_file(config.data_file());
    Controller::new(RegistraApi::new(store), view).run();
    Ok(())
}

/// Flag > REGISTRA_DATA env > platform data dir
fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var("REGISTRA_DATA") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "registra", "registra")
        .ok_or_else(|| RegistraError::Store("Could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
