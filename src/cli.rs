//! Command-line interface for strictly_gym.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_gym::{PolicyKind, RendererKind};

/// Strictly Gym - tic-tac-toe as a reinforcement learning environment
#[derive(Parser, Debug)]
#[command(name = "strictly_gym")]
#[command(about = "Play tic-tac-toe through a Gym-style environment", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one or more episodes
    Play(SessionArgs),

    /// Print the effective configuration as TOML
    Config(SessionArgs),
}

/// Options shared by every command; flags override the config file.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Renderer to use
    #[arg(short, long, value_enum)]
    pub renderer: Option<RendererKind>,

    /// Policy for the primary role (moves first)
    #[arg(long, value_enum)]
    pub primary: Option<PolicyKind>,

    /// Policy for the secondary role
    #[arg(long, value_enum)]
    pub secondary: Option<PolicyKind>,

    /// Seed for random policies
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of episodes to play
    #[arg(short, long)]
    pub episodes: Option<u32>,

    /// Print episode summaries as JSON lines
    #[arg(long)]
    pub json: bool,
}
