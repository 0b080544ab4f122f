use anyhow::Result;
use clap::Parser;
use lintspell::cli::output;
use lintspell::{Config, SpellChecker};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lintspell")]
#[command(version, about = "Checks spelling of identifiers, strings and comments in js files", long_about = None)]
struct Cli {
    /// JavaScript file to check
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintspell=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(file_path) = cli.file else {
        output::print_usage(true);
        return Ok(());
    };

    let config = Config::load()?;
    let checker = SpellChecker::from_config(&config)?;

    output::print_header(&file_path, config.color);
    let mut results = checker.check_file(&file_path)?;
    output::sort_by_line(&mut results);
    output::print_results(&results);

    Ok(())
}
