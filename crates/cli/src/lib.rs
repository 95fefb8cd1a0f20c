pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "dealcheck",
    about = "Dealcheck operator CLI",
    long_about = "Run the unit-price comparison engine directly and inspect effective configuration.",
    after_help = "Examples:\n  dealcheck eval \"500ml 150円 350ml 128円\"\n  dealcheck eval --marker yen \"500ml 150yen\"\n  dealcheck config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Compare the priced goods in TEXT and print the verdict")]
    Eval {
        #[arg(help = "Free-form text naming two or more priced goods")]
        text: String,
        #[arg(long, help = "Currency marker token overriding the configured one")]
        marker: Option<String>,
    },
    #[command(about = "Inspect effective configuration values with secrets redacted")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Eval { text, marker } => commands::eval::run(&text, marker.as_deref()),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
