//! CLI argument parsing using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ridesearch_core::filter::Intent;

/// ridesearch - Find rides in a rideshare group feed
#[derive(Parser, Debug)]
#[command(name = "ridesearch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the feed for rides
    #[command(alias = "s")]
    Search {
        /// Feed file (Graph API JSON; default: feed.path from config)
        #[arg(short, long, conflicts_with = "sample")]
        feed: Option<PathBuf>,

        /// Search the built-in sample feed instead of a file
        #[arg(long)]
        sample: bool,

        /// Ride type to show
        #[arg(short = 't', long = "type", value_enum, default_value = "driving")]
        ride_type: RideType,

        /// Ride date (YYYY-MM-DD); anything else means any date
        #[arg(short, long)]
        date: Option<String>,

        /// Keywords that must all appear in the post (space separated)
        #[arg(short, long, default_value = "")]
        keywords: String,

        /// Time zone for reading post dates (IANA name; default: config or local)
        #[arg(long)]
        tz: Option<String>,

        /// Limit results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the ride dates inferred for a piece of text
    Dates {
        /// Post text
        text: String,

        /// Reference time (RFC 3339 or Graph format; default: now)
        #[arg(long)]
        at: Option<String>,

        /// Time zone for the reference date (IANA name; default: config or local)
        #[arg(long)]
        tz: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Ride types, as offered on the search form.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RideType {
    /// Posts offering a ride
    #[value(alias = "offering")]
    Driving,
    /// Posts asking for a ride
    #[value(alias = "seeking")]
    Looking,
}

impl From<RideType> for Intent {
    fn from(ride_type: RideType) -> Self {
        match ride_type {
            RideType::Driving => Intent::Offering,
            RideType::Looking => Intent::Seeking,
        }
    }
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["ridesearch", "--verbose", "search", "--sample"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert!(!cli.json);

        let cli = Cli::parse_from(["ridesearch", "--quiet", "--json", "search", "--sample"]);
        assert!(!cli.verbose);
        assert!(cli.quiet);
        assert!(cli.json);
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::parse_from(["ridesearch", "search", "--sample"]);
        match cli.command {
            Some(Commands::Search {
                feed,
                sample,
                ride_type,
                date,
                keywords,
                tz,
                limit,
            }) => {
                assert!(feed.is_none());
                assert!(sample);
                assert_eq!(ride_type, RideType::Driving);
                assert!(date.is_none());
                assert_eq!(keywords, "");
                assert!(tz.is_none());
                assert!(limit.is_none());
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_search_all_options() {
        let cli = Cli::parse_from([
            "ridesearch",
            "s",
            "--feed",
            "feed.json",
            "--type",
            "looking",
            "--date",
            "2019-05-24",
            "--keywords",
            "UCSD bike",
            "--tz",
            "America/Los_Angeles",
            "--limit",
            "5",
        ]);
        match cli.command {
            Some(Commands::Search {
                feed,
                ride_type,
                date,
                keywords,
                tz,
                limit,
                ..
            }) => {
                assert_eq!(feed, Some(PathBuf::from("feed.json")));
                assert_eq!(ride_type, RideType::Looking);
                assert_eq!(date.as_deref(), Some("2019-05-24"));
                assert_eq!(keywords, "UCSD bike");
                assert_eq!(tz.as_deref(), Some("America/Los_Angeles"));
                assert_eq!(limit, Some(5));
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_ride_type_aliases() {
        let cli = Cli::parse_from(["ridesearch", "search", "--sample", "-t", "seeking"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Search {
                ride_type: RideType::Looking,
                ..
            })
        ));
    }

    #[test]
    fn test_ride_type_into_intent() {
        assert_eq!(Intent::from(RideType::Driving), Intent::Offering);
        assert_eq!(Intent::from(RideType::Looking), Intent::Seeking);
    }

    #[test]
    fn test_feed_conflicts_with_sample() {
        let result =
            Cli::try_parse_from(["ridesearch", "search", "--sample", "--feed", "feed.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dates_command() {
        let cli = Cli::parse_from([
            "ridesearch",
            "dates",
            "driving friday",
            "--at",
            "2019-05-22T12:00:00Z",
        ]);
        match cli.command {
            Some(Commands::Dates { text, at, tz }) => {
                assert_eq!(text, "driving friday");
                assert_eq!(at.as_deref(), Some("2019-05-22T12:00:00Z"));
                assert!(tz.is_none());
            }
            _ => panic!("Expected Dates command"),
        }
    }

    #[test]
    fn test_completions_command() {
        let cli = Cli::parse_from(["ridesearch", "completions", "zsh"]);
        if let Some(Commands::Completions { shell }) = cli.command {
            assert!(matches!(shell, Shell::Zsh));
        } else {
            panic!("Expected Completions command");
        }
    }
}
