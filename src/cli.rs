//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `questlog`.
#[derive(Debug, Parser)]
#[command(name = "questlog", version, about = "Complete quests, earn XP and gold, level up your hero")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by commands that start a session.
#[derive(Debug, Clone, Default, Args)]
pub struct SessionArgs {
    /// Hero name; overrides `QUESTLOG_HERO_NAME`.
    #[arg(long)]
    pub name: Option<String>,
    /// Start with an empty quest log instead of the starter quests.
    #[arg(long)]
    pub empty: bool,
    /// Print machine-readable JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the hero and quest log a new session starts with.
    Status {
        /// Session options.
        #[command(flatten)]
        session: SessionArgs,
    },
    /// List effort levels and their rewards.
    Efforts,
    /// Run a YAML script of player actions and report the outcome.
    Play {
        /// Script path, or `-` to read from stdin.
        script: PathBuf,
        /// Session options.
        #[command(flatten)]
        session: SessionArgs,
    },
}
