//! csvsplit command-line entry point

use clap::Parser;
use csvsplit_cli::commands::Commands;
use std::process::ExitCode;

/// Deduplicate CSV text exports and split them into even part files
#[derive(Debug, Parser)]
#[command(name = "csvsplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_split_with_negative_count() {
        let cli = Cli::try_parse_from(["csvsplit", "split", "-i", "a.csv", "-n", "-2"]).unwrap();
        match cli.command {
            Commands::Split(args) => assert_eq!(args.split_count, Some(-2)),
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_last_header_flag_wins() {
        let cli = Cli::try_parse_from([
            "csvsplit",
            "split",
            "-i",
            "a.csv",
            "--no-header",
            "--header",
        ])
        .unwrap();
        match cli.command {
            Commands::Split(args) => assert!(args.header && !args.no_header),
            other => panic!("expected split, got {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "csvsplit",
            "split",
            "-i",
            "a.csv",
            "--header",
            "--no-header",
        ])
        .unwrap();
        match cli.command {
            Commands::Split(args) => assert!(!args.header && args.no_header),
            other => panic!("expected split, got {other:?}"),
        }
    }
}
