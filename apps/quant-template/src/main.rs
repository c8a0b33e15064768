mod commands;

use clap::{Parser, Subcommand};
use commands::Command;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quant-template")]
#[command(
    about = "Quantitative Trading Template Package",
    version = quant_template::VERSION,
    arg_required_else_help = true
)]
#[command(
    after_help = "Examples:\n  quant-template info\n  quant-template --json exports\n  quant-template --config configs/sample.toml info\n"
)]
struct Cli {
    /// Optional TOML settings file ([logging] level/format).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print a single JSON document instead of human output.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Show package metadata and bound namespaces.
    Info,
    /// List the names the package republishes.
    Exports,
}

fn main() {
    let cli = Cli::parse();
    let command = match cli.command {
        CliCommand::Info => Command::Info,
        CliCommand::Exports => Command::Exports,
    };

    if let Err(err) = commands::run(cli.config.as_deref(), command, cli.json) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
