// main.rs - Desktop front end: paint cells with the mouse, step or run them

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use lifegame::{LifeConfig, Pattern};
use tracing::info;

mod ui;

#[derive(Debug, Parser)]
#[command(name = "lifegame", about = "Conway's Game of Life on a fixed board")]
struct Args {
    #[arg(long, default_value_t = 25)]
    columns: usize,

    #[arg(long, default_value_t = 25)]
    rows: usize,

    /// Pixels per cell edge
    #[arg(long, default_value_t = 20.0)]
    cell_size: f32,

    /// Delay between generations while running, in milliseconds
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Start from a named pattern: glider, blinker, block, toad or beacon
    #[arg(long)]
    pattern: Option<String>,
}

impl Args {
    fn config(&self) -> LifeConfig {
        LifeConfig {
            columns: self.columns,
            rows: self.rows,
            cell_size: self.cell_size,
            interval: Duration::from_millis(self.interval_ms),
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lifegame=info".parse()?)
                .add_directive("lifegame_ui=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = args.config();
    let pattern = args.pattern.as_deref().map(Pattern::by_name).transpose()?;

    let app = ui::LifeApp::new(config, pattern).context("failed to set up the board")?;
    let board = app.board_size();
    info!(width = board.x, height = board.y, "opening window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board.x + 40.0, board.y + 140.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("window failed: {e}"))
}
