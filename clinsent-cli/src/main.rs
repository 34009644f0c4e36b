//! clinsent command-line entry point

use clap::Parser;
use clinsent_cli::commands::Commands;

/// Rule-based sentence boundary detection for tokenized clinical documents
#[derive(Debug, Parser)]
#[command(name = "clinsent", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process() {
        let cli = Cli::try_parse_from(["clinsent", "process", "-i", "a.json", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input, vec!["a.json".to_string()]);
                assert!(!args.keep_excluded);
            }
            _ => panic!("expected process command"),
        }
    }
}
