use std::collections::HashSet;
use std::time::Duration;

use crate::error::ConfigError;
use crate::geom::{Direction, Pos, Size};

const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: Size,
    pub tick_rate: Duration,
    // tail first
    pub initial_body: Vec<Pos>,
    pub initial_direction: Direction,
    // None draws one at random
    pub initial_fruit: Option<Pos>,
    pub max_spawn_attempts: u32,
    pub input_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: Size::new(30, 20),
            tick_rate: Duration::from_millis(250),
            initial_body: (3..=7).map(|col| Pos::new(2, col)).collect(),
            initial_direction: Direction::Right,
            initial_fruit: Some(Pos::new(5, 6)),
            max_spawn_attempts: 64,
            input_capacity: 32,
        }
    }
}

impl GameConfig {
    pub fn small() -> Self {
        GameConfig {
            size: Size::new(10, 10),
            tick_rate: Duration::from_millis(500),
            initial_body: (1..=5).map(|col| Pos::new(2, col)).collect(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.size;
        if size.width == 0 || size.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: size.width,
                height: size.height,
            });
        }
        if self.tick_rate.is_zero() {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.max_spawn_attempts == 0 {
            return Err(ConfigError::ZeroSpawnAttempts);
        }
        if self.input_capacity == 0 {
            return Err(ConfigError::ZeroInputCapacity);
        }

        if self.initial_body.is_empty() {
            return Err(ConfigError::EmptySnake);
        }
        if self.initial_body.len() > size.cell_count() {
            return Err(ConfigError::SnakeTooLong {
                length: self.initial_body.len(),
                cells: size.cell_count(),
            });
        }

        let mut seen = HashSet::with_capacity(self.initial_body.len());
        let mut previous: Option<Pos> = None;
        for &pos in &self.initial_body {
            if !size.contains(pos) {
                return Err(ConfigError::SegmentOutOfBounds {
                    row: pos.row,
                    col: pos.col,
                });
            }
            if !seen.insert(pos) {
                return Err(ConfigError::DuplicateSegment {
                    row: pos.row,
                    col: pos.col,
                });
            }
            if let Some(prev) = previous {
                let adjacent = ALL_DIRECTIONS
                    .iter()
                    .any(|dir| prev.wrapped_add((*dir).into(), size) == pos);
                if !adjacent {
                    return Err(ConfigError::DisjointSegment {
                        row: pos.row,
                        col: pos.col,
                    });
                }
            }
            previous = Some(pos);
        }

        if let Some(fruit) = self.initial_fruit {
            if !size.contains(fruit) {
                return Err(ConfigError::FruitOutOfBounds {
                    row: fruit.row,
                    col: fruit.col,
                });
            }
            if seen.contains(&fruit) {
                return Err(ConfigError::FruitOnSnake {
                    row: fruit.row,
                    col: fruit.col,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.size, Size::new(30, 20));
        assert_eq!(config.tick_rate, Duration::from_millis(250));
        assert_eq!(config.initial_body.len(), 5);
        assert_eq!(config.initial_body[0], Pos::new(2, 3));
        assert_eq!(config.initial_body[4], Pos::new(2, 7));
        assert_eq!(config.initial_direction, Direction::Right);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_small_config() {
        let config = GameConfig::small();
        assert_eq!(config.size, Size::new(10, 10));
        assert_eq!(config.tick_rate, Duration::from_millis(500));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = GameConfig::default().with_size(0, 20);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyGrid {
                width: 0,
                height: 20
            })
        );
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let config = GameConfig::default().with_tick_rate(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));
    }

    #[test]
    fn test_rejects_empty_snake() {
        let config = GameConfig {
            initial_body: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptySnake));
    }

    #[test]
    fn test_rejects_snake_outside_grid() {
        // default body reaches column 7
        let config = GameConfig::default().with_size(6, 6);
        assert_eq!(
            config.validate(),
            Err(ConfigError::SegmentOutOfBounds { row: 2, col: 6 })
        );
    }

    #[test]
    fn test_rejects_snake_longer_than_grid() {
        let config = GameConfig::default().with_size(2, 2);
        assert_eq!(
            config.validate(),
            Err(ConfigError::SnakeTooLong {
                length: 5,
                cells: 4
            })
        );
    }

    #[test]
    fn test_rejects_duplicate_and_disjoint_segments() {
        let config = GameConfig {
            initial_body: vec![Pos::new(2, 3), Pos::new(2, 4), Pos::new(2, 3)],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateSegment { row: 2, col: 3 })
        );

        let config = GameConfig {
            initial_body: vec![Pos::new(2, 3), Pos::new(4, 3)],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DisjointSegment { row: 4, col: 3 })
        );
    }

    #[test]
    fn test_accepts_snake_across_border() {
        let config = GameConfig {
            initial_body: vec![Pos::new(2, 28), Pos::new(2, 29), Pos::new(2, 0)],
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_fruit() {
        let config = GameConfig {
            initial_fruit: Some(Pos::new(2, 5)),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::FruitOnSnake { row: 2, col: 5 })
        );

        let config = GameConfig {
            initial_fruit: Some(Pos::new(20, 0)),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::FruitOutOfBounds { row: 20, col: 0 })
        );
    }

    #[test]
    fn test_rejects_zero_limits() {
        let config = GameConfig {
            max_spawn_attempts: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSpawnAttempts));

        let config = GameConfig {
            input_capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroInputCapacity));
    }
}
