pub mod body;
pub mod config;
pub mod engine;
pub mod error;
pub mod geom;
pub mod grid;
pub mod input;
pub mod rules;
pub mod session;
pub mod spawner;
pub mod tui;

pub use config::GameConfig;
pub use engine::{EndReason, Game, GameState, StepResult};
pub use error::{ConfigError, Error, InputError, SpawnError};
pub use geom::{Direction, Pos, Size};
pub use grid::{Cell, Grid};
