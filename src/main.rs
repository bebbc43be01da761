use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::KeyCode;
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use snekgrid::input::{self, InputBridge, Intent};
use snekgrid::session;
use snekgrid::tui::TerminalRenderer;
use snekgrid::GameConfig;

#[derive(Parser)]
#[command(name = "snekgrid")]
#[command(version, about = "Snake on a wrapping grid, in the terminal")]
struct Cli {
    /// Use the 10x10 layout with a 500ms tick
    #[arg(long)]
    small: bool,

    /// Grid width in cells
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<u16>,

    /// Milliseconds per tick
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Where to write the log
    #[arg(long, default_value = "snekgrid.log")]
    log_file: PathBuf,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let mut config = if self.small {
            GameConfig::small()
        } else {
            GameConfig::default()
        };
        config.size.width = self.width.unwrap_or(config.size.width);
        config.size.height = self.height.unwrap_or(config.size.height);
        if let Some(ms) = self.tick_ms {
            config.tick_rate = Duration::from_millis(ms);
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(LevelFilter::Info, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    info!("Starting snekgrid");

    let config = cli.game_config();
    config.validate().context("Invalid game configuration")?;

    let (tx, bridge) = input::channel(config.input_capacity);
    let mut renderer = TerminalRenderer::enter().context("Failed to set up terminal")?;
    let result = input::spawn_terminal_reader(tx)
        .context("Failed to start key reader")
        .and_then(|_| menu(&config, &bridge, &mut renderer));

    // Cleanup terminal
    let restored = renderer.restore().context("Failed to restore terminal");
    finish(result, restored)
}

// A game error wins over a failed terminal restore; both get logged.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), restored) => {
            error!("{:#}", e);
            if let Err(r) = restored {
                error!("{:#}", r);
            }
            Err(e)
        }
        (Ok(()), Err(r)) => {
            error!("{:#}", r);
            Err(r)
        }
        (Ok(()), Ok(())) => Ok(()),
    }
}

fn menu(config: &GameConfig, bridge: &InputBridge, renderer: &mut TerminalRenderer) -> Result<()> {
    let mut status = renderer.status_line();
    renderer.show_start_menu()?;

    loop {
        let key = bridge.next_key()?;
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                bridge.discard_pending();
                let summary = session::play(config, bridge, renderer, &mut status)?;
                renderer.show_game_over(&summary)?;
            }
            _ if Intent::from_key_event(key) == Some(Intent::Quit) => {
                info!("Exiting");
                return Ok(());
            }
            _ => {}
        }
    }
}
