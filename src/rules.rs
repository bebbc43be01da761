use crate::body::BodyTrack;
use crate::geom::{Pos, PosDelta, Size};

pub fn wrap(value: i32, dimension: u16) -> u16 {
    value.rem_euclid(dimension as i32) as u16
}

impl Pos {
    pub fn wrapped_add(&self, delta: PosDelta, size: Size) -> Pos {
        Pos {
            row: wrap(self.row as i32 + delta.row, size.height),
            col: wrap(self.col as i32 + delta.col, size.width),
        }
    }
}

// Checked before the head is pushed, so the tail cell still counts.
pub fn self_collides(new_head: Pos, body: &BodyTrack) -> bool {
    body.contains(new_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Direction;

    fn arena() -> Size {
        Size::new(10, 10)
    }

    #[test]
    fn test_wrap_axis() {
        assert_eq!(wrap(10, 10), 0);
        assert_eq!(wrap(-1, 10), 9);
        assert_eq!(wrap(4, 10), 4);
        assert_eq!(wrap(-1, 1), 0);
    }

    #[test]
    fn test_zero_delta() {
        let delta = PosDelta { row: 0, col: 0 };
        for pos in [Pos::new(5, 5), Pos::new(0, 0), Pos::new(9, 9)] {
            assert_eq!(pos.wrapped_add(delta, arena()), pos);
        }
    }

    #[test]
    fn test_all_directions() {
        let pos = Pos::new(5, 5);

        assert_eq!(pos.wrapped_add(Direction::Up.into(), arena()), Pos::new(4, 5));
        assert_eq!(pos.wrapped_add(Direction::Down.into(), arena()), Pos::new(6, 5));
        assert_eq!(pos.wrapped_add(Direction::Right.into(), arena()), Pos::new(5, 6));
        assert_eq!(pos.wrapped_add(Direction::Left.into(), arena()), Pos::new(5, 4));
    }

    #[test]
    fn test_wrap_each_border() {
        let size = Size::new(30, 20);

        // rightmost column moving right
        assert_eq!(
            Pos::new(7, 29).wrapped_add(Direction::Right.into(), size),
            Pos::new(7, 0)
        );
        assert_eq!(
            Pos::new(7, 0).wrapped_add(Direction::Left.into(), size),
            Pos::new(7, 29)
        );
        assert_eq!(
            Pos::new(0, 12).wrapped_add(Direction::Up.into(), size),
            Pos::new(19, 12)
        );
        assert_eq!(
            Pos::new(19, 12).wrapped_add(Direction::Down.into(), size),
            Pos::new(0, 12)
        );
    }

    #[test]
    fn test_non_square_arena_round_trip() {
        let size = Size::new(8, 6);
        let pos = Pos::new(3, 3);
        let delta = PosDelta { row: 6, col: 8 };
        assert_eq!(pos.wrapped_add(delta, size), pos);

        let delta = PosDelta { row: -6, col: -8 };
        assert_eq!(pos.wrapped_add(delta, size), pos);
    }

    #[test]
    fn test_self_collision() {
        let body = BodyTrack::from_cells(
            [Pos::new(5, 7), Pos::new(5, 6), Pos::new(5, 5)],
            100,
        );

        assert!(self_collides(Pos::new(5, 7), &body)); // tail
        assert!(self_collides(Pos::new(5, 6), &body));
        assert!(self_collides(Pos::new(5, 5), &body)); // head
        assert!(!self_collides(Pos::new(4, 5), &body)); // adjacent
    }
}
