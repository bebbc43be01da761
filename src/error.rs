use std::io;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: u16, height: u16 },
    #[error("tick rate must be non-zero")]
    ZeroTickRate,
    #[error("initial snake must have at least one segment")]
    EmptySnake,
    #[error("initial snake has {length} segments but the grid only has {cells} cells")]
    SnakeTooLong { length: usize, cells: usize },
    #[error("snake segment ({row}, {col}) lies outside the grid")]
    SegmentOutOfBounds { row: u16, col: u16 },
    #[error("snake segment ({row}, {col}) appears more than once")]
    DuplicateSegment { row: u16, col: u16 },
    #[error("snake segment ({row}, {col}) is not adjacent to the one before it")]
    DisjointSegment { row: u16, col: u16 },
    #[error("initial fruit ({row}, {col}) lies outside the grid")]
    FruitOutOfBounds { row: u16, col: u16 },
    #[error("initial fruit ({row}, {col}) is on the snake")]
    FruitOnSnake { row: u16, col: u16 },
    #[error("fruit spawner needs at least one attempt")]
    ZeroSpawnAttempts,
    #[error("input queue capacity must be non-zero")]
    ZeroInputCapacity,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no free cell left for fruit ({occupied} of {cells} cells occupied)")]
    Saturated { occupied: usize, cells: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input source disconnected")]
    Disconnected,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("render failed: {0}")]
    Render(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
