pub mod commands;

use std::{ffi::OsString, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};

use crate::utils::normalizations::WordClass;

/// Turns arbitrary names into lowercase, underscore-separated filename stems.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Config file. Defaults to ./normalizer.toml when it exists.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides `normalizer.word_class` from the config.
    #[arg(long, value_enum, global = true)]
    pub word_class: Option<WordClass>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the normalized form of each name, one per line. Reads stdin when no names are given.
    Normalize {
        names: Vec<OsString>
    },

    /// Report names that are not already normalized. Exits non-zero if any are found.
    Check {
        names: Vec<OsString>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_global_flags() {
        let cli = Cli::try_parse_from(["name-normalizer", "normalize", "--word-class", "unicode", "-vv", "A B", "C"]).unwrap();

        assert_eq!(cli.word_class, Some(WordClass::Unicode));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Normalize { names } => assert_eq!(names, vec![OsString::from("A B"), OsString::from("C")]),
            Command::Check { .. } => panic!("expected normalize"),
        }
    }

    #[test]
    fn check_without_names_is_allowed() {
        let cli = Cli::try_parse_from(["name-normalizer", "--config", "x.toml", "check"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Command::Check { names } if names.is_empty()));
    }

    #[test]
    fn rejects_unknown_word_class() {
        assert!(Cli::try_parse_from(["name-normalizer", "normalize", "--word-class", "latin"]).is_err());
    }
}
