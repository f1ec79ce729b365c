//! Gomoku desktop game and headless AI-vs-AI runner

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use gomoku::ui::{GameOutcome, GameState, GomokuApp};
use gomoku::{GameConfig, GameMode, Stone};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

/// Play Gomoku against a minimax / alpha-beta engine.
#[derive(Parser)]
#[command(name = "gomoku", about = "Gomoku with a minimax and alpha-beta AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<u8>,

    /// Override board edge length
    #[arg(long)]
    board_size: Option<usize>,

    /// Override the run length needed to win
    #[arg(long)]
    win_length: Option<usize>,

    /// Seed the move shuffle for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Let the engine play both sides
    #[arg(long, conflicts_with = "human")]
    ai_vs_ai: bool,

    /// Side played by the human
    #[arg(long, value_enum)]
    human: Option<Side>,

    /// Play AI vs AI in the terminal and print the final board
    #[arg(long)]
    headless: bool,
}

impl Cli {
    /// Command-line values take precedence over the file
    fn apply(&self, config: &mut GameConfig) {
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(size) = self.board_size {
            config.board_size = size;
            // Keep the default run length playable on small boards
            if self.win_length.is_none() {
                config.win_length = config.win_length.min(size);
            }
        }
        if let Some(win_length) = self.win_length {
            config.win_length = win_length;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.ai_vs_ai || self.headless {
            config.mode = GameMode::AiVsAi;
        } else if let Some(side) = self.human {
            config.mode = GameMode::HumanVsAi {
                human_color: side.into(),
            };
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gomoku=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid settings")?;

    if cli.headless {
        run_headless(config)
    } else {
        run_gui(config)
    }
}

fn run_headless(config: GameConfig) -> Result<()> {
    let mut state = GameState::new(config);
    println!("{}", state.players_text());

    while !state.is_over() {
        if state.play_ai_turn_blocking()?.is_none() {
            bail!("engine found no move on a live board");
        }
    }

    println!("{}", state.board);
    match &state.outcome {
        Some(GameOutcome::Win { line, .. }) => {
            let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
            println!("{} [{}]", state.status_text(), cells.join(" "));
        }
        _ => println!("{}", state.status_text()),
    }
    println!("{} moves", state.move_history.len());
    Ok(())
}

fn run_gui(config: GameConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("failed to run the GUI: {e}"))
}
