use anyhow::Context;
use clap::Parser;
use colored::*;

use fmtsweep_lib::Config;
use fmtsweep_lib::exit_codes::exit;

/// Run clang-format in place over every C source and header under the kernel
/// source directories (src/devices, src/examples, src/kernel, src/filesys).
///
/// Run from the repository root. Formatter failures do not stop the run.
#[derive(Parser)]
#[command(author, version, about, long_about)]
struct Cli {}

fn run_main() -> anyhow::Result<()> {
    let config = Config::default();
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    log::debug!("Formatting from {}", cwd.display());

    fmtsweep_lib::run(&config).context("Formatting run aborted")?;
    Ok(())
}

fn main() {
    let _cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run_main() {
        eprintln!("{}: {e:#}", "Error".red().bold());
        exit::tool_error();
    }
    exit::success();
}
