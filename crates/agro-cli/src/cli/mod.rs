use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `agrosalud` binary.
#[derive(Debug, Parser)]
#[command(
    name = "agrosalud",
    version,
    about = "AgroSalud - farm animal profiles and health records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::{AnimalCommands, AuthCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "agrosalud",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "history",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::History(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["agrosalud", "auth", "status", "--format", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["agrosalud", "--format", "xml", "history"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn animal_create_requires_kind_name_tag_and_sex() {
        assert!(Cli::try_parse_from(["agrosalud", "animal", "create", "--name", "Lola"]).is_err());

        let cli = Cli::try_parse_from([
            "agrosalud",
            "animal",
            "create",
            "--kind",
            "cow",
            "--name",
            "Lola",
            "--tag",
            "NI-001",
            "--sex",
            "female",
            "--birth-date",
            "2022-01-15",
        ])
        .expect("cli should parse");
        let Commands::Animal {
            action: AnimalCommands::Create(args),
        } = cli.command
        else {
            panic!("expected animal create");
        };
        assert_eq!(args.kind, "cow");
        assert_eq!(
            args.birth_date,
            chrono::NaiveDate::from_ymd_opt(2022, 1, 15)
        );
    }

    #[test]
    fn invalid_date_is_rejected_by_the_parser() {
        let parsed = Cli::try_parse_from([
            "agrosalud",
            "vaccination",
            "create",
            "--animal",
            "Lola",
            "--species",
            "cattle",
            "--vaccine",
            "Rabies",
            "--date",
            "15/01/2024",
        ]);
        assert!(parsed.is_err());
    }
}
