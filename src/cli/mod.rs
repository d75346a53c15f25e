//! CLI module for the `wanandroid` binary.
//!
//! - Argument parsing
//! - Version display
//! - A headless presenter that loads one screen and prints it
//!
//! ```ignore
//! use wanandroid::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! run_cli_command(command).await?;
//! ```

pub mod args;
pub mod run;
pub mod version;

pub use args::{parse_args, CliCommand, ProjectArg, RunOptions, ScreenArg, USAGE};
pub use run::{build_client, run_screen};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a parsed command to completion.
pub async fn run_cli_command(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Invalid(reason) => {
            eprintln!("{}", USAGE);
            Err(eyre!(reason))
        }
        CliCommand::Run(options) => {
            let api = build_client(&options)?;
            run_screen(options, api).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_command_is_error() {
        let result = run_cli_command(CliCommand::Invalid("unknown screen 'x'".to_string())).await;
        assert_eq!(result.unwrap_err().to_string(), "unknown screen 'x'");
    }

    #[tokio::test]
    async fn test_help_succeeds() {
        assert!(run_cli_command(CliCommand::Help).await.is_ok());
    }
}
