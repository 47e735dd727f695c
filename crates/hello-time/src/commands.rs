use clap::Parser;
use clap::Subcommand;
pub use clap_complete::Shell;

const LONG_ABOUT: &str = r#"hello-time prints the current local time as a single line.

OUTPUT:
    Www Mmm dd HH:MM:SS yyyy

    The time zone is the host's (TZ on Unix).

LOGGING:
    Logs go to stderr. Set RUST_LOG to change the filter, or HELLO_TIME_LOG
    to a file path to append logs there instead. HELLO_TIME_VERBOSE=true
    has the same effect as --verbose.

EXAMPLES:
    hello-time
    TZ=UTC hello-time
    hello-time completions bash > /etc/bash_completion.d/hello-time"#;

#[derive(Debug, Parser)]
#[command(name = "hello-time")]
#[command(author, version)]
#[command(about = "Print the current local time")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, env = "HELLO_TIME_VERBOSE")]
    pub verbose: bool,
}

impl Cli {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the current local time (the default)
    Now,

    /// Generate a shell completion script
    #[command(long_about = r#"Generate a shell completion script.

EXAMPLES:
    hello-time completions bash
    hello-time completions zsh > ~/.zfunc/_hello-time"#)]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
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
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["hello-time"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let cli = Cli::try_parse_from(["hello-time", "now", "-v"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Now)));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_completions_parses_shell() {
        let cli = Cli::try_parse_from(["hello-time", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Zsh })
        ));
    }

    #[test]
    fn test_unknown_shell_is_rejected() {
        assert!(Cli::try_parse_from(["hello-time", "completions", "cmd.exe"]).is_err());
    }
}
