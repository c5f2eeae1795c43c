//! Strictly Gym - Unified CLI
//!
//! Wires a renderer and two policies into the tic-tac-toe environment and
//! plays episodes.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SessionArgs};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use strictly_gym::{
    ConsolePolicy, ConsoleRenderer, EpisodeSummary, FirstLegalPolicy, GameConfig, KeyboardPolicy,
    Policy, PolicyKind, RandomPolicy, Renderer, RendererKind, TerminalRenderer, TicTacToeEnv,
    terminal_keys,
};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => {
            let config = load_config(args)?;
            init_tracing(*config.renderer())?;
            run_play(&config)
        }
        Command::Config(args) => {
            let config = load_config(args)?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Reads the config file (if any), applies flag overrides and validates.
fn load_config(args: SessionArgs) -> Result<GameConfig> {
    let base = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let config = base.with_overrides(
        args.renderer,
        args.primary,
        args.secondary,
        args.seed,
        args.episodes,
        args.json,
    );
    config.validate()?;
    Ok(config)
}

/// Logs go to stderr, or to a file while the full-screen UI owns the terminal.
fn init_tracing(renderer: RendererKind) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match renderer {
        RendererKind::Console => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
        }
        RendererKind::Terminal => {
            let log_file = std::fs::File::create("strictly_gym.log")
                .context("Failed to create log file")?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .try_init();
        }
    }
    Ok(())
}

/// Builds the policy for one role.
///
/// With `json` set, console prompts go to stderr so stdout carries only
/// summaries.
fn build_policy(kind: PolicyKind, name: &str, seed: Option<u64>, json: bool) -> Box<dyn Policy> {
    match kind {
        PolicyKind::Console if json => Box::new(ConsolePolicy::new(
            name,
            io::stdin().lock(),
            io::stderr(),
        )),
        PolicyKind::Console => Box::new(ConsolePolicy::stdio(name)),
        PolicyKind::Keyboard => Box::new(KeyboardPolicy::new(name, terminal_keys())),
        PolicyKind::Random => match seed {
            Some(seed) => Box::new(RandomPolicy::with_seed(name, seed)),
            None => Box::new(RandomPolicy::new(name)),
        },
        PolicyKind::FirstLegal => Box::new(FirstLegalPolicy::new(name)),
    }
}

/// Plays the configured number of episodes and reports each result.
#[instrument(skip_all, fields(renderer = %config.renderer(), episodes = config.episodes()))]
fn run_play(config: &GameConfig) -> Result<()> {
    info!("Starting Strictly Gym");

    let seed = *config.seed();
    let json = *config.json();
    let mut primary = build_policy(*config.primary(), "Human", seed, json);
    // Offset so two seeded random policies do not mirror each other.
    let secondary_seed = seed.map(|s| s.wrapping_add(1));
    let mut secondary = build_policy(*config.secondary(), "AI", secondary_seed, json);

    let summaries = match config.renderer() {
        RendererKind::Console if json => {
            let mut renderer = ConsoleRenderer::stderr();
            play_episodes(config, primary.as_mut(), secondary.as_mut(), &mut renderer)?
        }
        RendererKind::Console => {
            let mut renderer = ConsoleRenderer::stdout();
            play_episodes(config, primary.as_mut(), secondary.as_mut(), &mut renderer)?
        }
        RendererKind::Terminal => {
            enable_raw_mode()?;
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let mut renderer = TerminalRenderer::new(Terminal::new(CrosstermBackend::new(stdout))?);

            let res = play_episodes(config, primary.as_mut(), secondary.as_mut(), &mut renderer);

            disable_raw_mode()?;
            execute!(renderer.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
            renderer.terminal_mut().show_cursor()?;
            res?
        }
    };

    for summary in &summaries {
        if json {
            println!("{}", serde_json::to_string(summary)?);
        } else {
            println!("Game ended with status: {}", summary.status());
        }
    }
    Ok(())
}

fn play_episodes(
    config: &GameConfig,
    primary: &mut dyn Policy,
    secondary: &mut dyn Policy,
    renderer: &mut dyn Renderer,
) -> Result<Vec<EpisodeSummary>> {
    let mut env = TicTacToeEnv::new(primary, secondary, renderer);
    let mut summaries = Vec::new();
    for episode in 1..=*config.episodes() {
        match env.play_episode() {
            Ok(summary) => {
                info!(episode, status = %summary.status(), "Episode complete");
                summaries.push(summary);
            }
            Err(e) => {
                error!(episode, error = %e, "Episode failed");
                return Err(e.into());
            }
        }
    }
    Ok(summaries)
}
