use std::time::Duration;

use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::body::BodyTrack;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::geom::{Direction, Pos, Size};
use crate::grid::Grid;
use crate::rules;
use crate::spawner::FruitSpawner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Ongoing,
    // carries the new length
    Nommed(usize),
    // body left as it was before the tick
    Collision,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Collision,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    body: BodyTrack,
    direction: Direction,
    fruit: Option<Pos>,
    alive: bool,
}

impl GameState {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn body(&self) -> &BodyTrack {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    // None once the snake fills every cell
    pub fn fruit(&self) -> Option<Pos> {
        self.fruit
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    pub fn head(&self) -> Option<Pos> {
        self.body.head()
    }

    fn rebuild_grid(&mut self) {
        self.grid.rebuild(&self.body, self.fruit);
    }
}

pub struct Game<R = ThreadRng> {
    state: GameState,
    spawner: FruitSpawner,
    rng: R,
    tick_rate: Duration,
    ticks: u64,
    end_reason: Option<EndReason>,
}

impl Game<ThreadRng> {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Game::new_with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn new_with_rng(config: &GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let size = config.size;
        let body = BodyTrack::from_cells(config.initial_body.iter().copied(), size.cell_count());
        let spawner = FruitSpawner::new(config.max_spawn_attempts);
        let fruit = match config.initial_fruit {
            Some(pos) => Some(pos),
            None => spawner.respawn(&body, size, &mut rng).ok(),
        };

        let mut state = GameState {
            grid: Grid::new(size),
            body,
            direction: config.initial_direction,
            fruit,
            alive: true,
        };
        state.rebuild_grid();

        info!(
            "new game on {}x{} grid, snake length {}",
            size.width,
            size.height,
            state.body.len()
        );

        Ok(Game {
            state,
            spawner,
            rng,
            tick_rate: config.tick_rate,
            ticks: 0,
            end_reason: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    // Reversal is allowed; the next tick's collision check ends the game.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.state.alive && direction != self.state.direction {
            debug!("direction {:?} -> {:?}", self.state.direction, direction);
            self.state.direction = direction;
        }
    }

    pub fn quit(&mut self) {
        if self.state.alive {
            info!("quit after {} ticks", self.ticks);
            self.state.alive = false;
            self.end_reason = Some(EndReason::Quit);
        }
    }

    pub fn tick(&mut self) -> StepResult {
        if !self.state.alive {
            return StepResult::Over;
        }
        let Some(head) = self.state.body.head() else {
            return StepResult::Over;
        };
        self.ticks += 1;

        let size = self.state.size();
        let new_head = head.wrapped_add(self.state.direction.into(), size);

        if rules::self_collides(new_head, &self.state.body) {
            info!(
                "collision at ({}, {}) after {} ticks, length {}",
                new_head.row,
                new_head.col,
                self.ticks,
                self.state.body.len()
            );
            self.state.alive = false;
            self.end_reason = Some(EndReason::Collision);
            return StepResult::Collision;
        }

        let result = if self.state.fruit == Some(new_head) {
            self.state.body.push_head(new_head);
            self.state.fruit = self
                .spawner
                .respawn(&self.state.body, size, &mut self.rng)
                .ok();
            let length = self.state.body.len();
            info!("nom at ({}, {}), length {}", new_head.row, new_head.col, length);
            StepResult::Nommed(length)
        } else {
            self.state.body.push_head(new_head);
            self.state.body.pop_tail();
            StepResult::Ongoing
        };

        self.state.rebuild_grid();
        debug!("tick {}: {:?}", self.ticks, result);
        result
    }
}
