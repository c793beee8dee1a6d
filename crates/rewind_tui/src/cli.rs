//! Command-line interface for rewind_tui.

use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe with a rewindable move history
#[derive(Parser, Debug, Default)]
#[command(name = "rewind_tui")]
#[command(about = "Play tic-tac-toe in the terminal and jump back to any move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rewind_tui"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(!cli.descending);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "rewind_tui",
            "--config",
            "game.toml",
            "--log-file",
            "out.log",
            "--descending",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
        assert!(cli.descending);
    }
}
