use std::io;
use std::thread;
use std::time::Instant;

use log::info;
use rand::Rng;

use crate::config::GameConfig;
use crate::engine::{EndReason, Game};
use crate::error::Result;
use crate::grid::Grid;
use crate::input::{InputBridge, Intent};

// Called once per tick; must return before the next tick starts.
pub trait Renderer {
    fn render(&mut self, grid: &Grid) -> io::Result<()>;
}

pub trait Diagnostics {
    fn report(&mut self, status: &str);
}

#[derive(Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, status: &str) {
        info!("{}", status);
    }
}

impl Diagnostics for Vec<String> {
    fn report(&mut self, status: &str) {
        self.push(status.to_owned());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub ticks: u64,
    pub final_length: usize,
    pub reason: EndReason,
}

pub const GAME_OVER: &str = "game over";

pub fn play(
    config: &GameConfig,
    input: &InputBridge,
    renderer: &mut impl Renderer,
    diagnostics: &mut impl Diagnostics,
) -> Result<GameSummary> {
    let mut game = Game::new(config)?;
    run(&mut game, input, renderer, diagnostics)
}

pub fn run<R: Rng>(
    game: &mut Game<R>,
    input: &InputBridge,
    renderer: &mut impl Renderer,
    diagnostics: &mut impl Diagnostics,
) -> Result<GameSummary> {
    let tick_rate = game.tick_rate();
    let mut next_tick = Instant::now();

    while game.state().is_alive() {
        game.tick();
        diagnostics.report(&game.state().body().to_string());
        renderer.render(game.state().grid())?;

        if !game.state().is_alive() {
            break;
        }

        next_tick += tick_rate;
        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        } else {
            // fell behind, don't try to catch up with a burst of ticks
            next_tick = now;
        }

        match input.poll_latest()? {
            Some(Intent::Turn(direction)) => game.set_direction(direction),
            Some(Intent::Quit) => game.quit(),
            None => {}
        }
    }

    diagnostics.report(GAME_OVER);

    let summary = GameSummary {
        ticks: game.ticks(),
        final_length: game.state().body().len(),
        reason: game.end_reason().unwrap_or(EndReason::Collision),
    };
    info!("{:?}", summary);
    Ok(summary)
}
