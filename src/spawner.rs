use log::{debug, warn};
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::body::BodyTrack;
use crate::error::SpawnError;
use crate::geom::{Pos, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FruitSpawner {
    max_attempts: u32,
}

impl FruitSpawner {
    pub fn new(max_attempts: u32) -> Self {
        FruitSpawner { max_attempts }
    }

    // Random draws first, then a pick among the free cells. Only a full
    // grid is an error.
    pub fn respawn(
        &self,
        body: &BodyTrack,
        size: Size,
        rng: &mut impl Rng,
    ) -> Result<Pos, SpawnError> {
        for _ in 0..self.max_attempts {
            let pos = Pos {
                row: rng.gen_range(0..size.height),
                col: rng.gen_range(0..size.width),
            };

            if !body.contains(pos) {
                return Ok(pos);
            }
        }

        debug!(
            "no free cell after {} draws, scanning the grid",
            self.max_attempts
        );
        free_cells(body, size).choose(rng).ok_or_else(|| {
            warn!("grid saturated, no room for fruit");
            SpawnError::Saturated {
                occupied: body.len(),
                cells: size.cell_count(),
            }
        })
    }
}

fn free_cells(body: &BodyTrack, size: Size) -> impl Iterator<Item = Pos> + '_ {
    (0..size.height)
        .flat_map(move |row| (0..size.width).map(move |col| Pos::new(row, col)))
        .filter(move |pos| !body.contains(*pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_respawn_avoids_body() {
        let size = Size::new(10, 10);
        let body = BodyTrack::from_cells((1..=5).map(|col| Pos::new(2, col)), 100);
        let spawner = FruitSpawner::new(64);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let pos = spawner.respawn(&body, size, &mut rng).unwrap();
            assert!(size.contains(pos));
            assert!(!body.contains(pos));
        }
    }

    #[test]
    fn test_crowded_grid_falls_back_to_scan() {
        // every cell but (2, 2) is taken, and one draw is almost never enough
        let size = Size::new(3, 3);
        let cells: Vec<Pos> = (0..3)
            .flat_map(|row| (0..3).map(move |col| Pos::new(row, col)))
            .filter(|pos| *pos != Pos::new(2, 2))
            .collect();
        let body = BodyTrack::from_cells(cells, 9);
        let spawner = FruitSpawner::new(1);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(spawner.respawn(&body, size, &mut rng), Ok(Pos::new(2, 2)));
        }
    }

    #[test]
    fn test_saturated_grid_is_an_error() {
        let size = Size::new(2, 2);
        let body = BodyTrack::from_cells(
            [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1), Pos::new(1, 0)],
            4,
        );
        let spawner = FruitSpawner::new(16);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            spawner.respawn(&body, size, &mut rng),
            Err(SpawnError::Saturated {
                occupied: 4,
                cells: 4
            })
        );
    }
}
