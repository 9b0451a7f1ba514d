use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;
mod session;

fn main() {
    if let Err(error) = run() {
        eprintln!("taxa error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let config = bootstrap::load_config(&flags)?;
    init_tracing(flags.quiet, flags.verbose, &config.general.log_level)?;

    let command = cli.command.unwrap_or_default();
    commands::dispatch::dispatch(command, &config, &flags)
}

/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TAXA_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .map_err(|error| anyhow::anyhow!("invalid log filter '{level}': {error}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
