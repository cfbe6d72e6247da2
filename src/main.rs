use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trans_cli::TransError;
use trans_cli::cli::Args;
use trans_cli::cli::commands::translate::{self, TranslateOptions};
use trans_cli::config::ConfigManager;
use trans_cli::output::{self, OutputConfig};
use trans_cli::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var_os("NO_COLOR").is_some(),
    });
    init_logging(args.verbose);

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_first_run() => {
            println!("{err}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err}", Style::error("错误:"));
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(args: &Args) -> Result<(), TransError> {
    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    let config = manager.load()?;

    let options = TranslateOptions::from_args(args);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    translate::run_translate(&options, &config, stdin, &mut stdout).await
}

/// Diagnostics go to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
