use std::collections::VecDeque;
use std::fmt;

use crate::geom::Pos;

// Tail first, head last. Capacity is the grid's cell count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyTrack {
    cells: VecDeque<Pos>,
    capacity: usize,
}

impl BodyTrack {
    pub fn new(capacity: usize) -> Self {
        BodyTrack {
            cells: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Pos>, capacity: usize) -> Self {
        let mut track = BodyTrack::new(capacity);
        for pos in cells {
            track.push_head(pos);
        }
        track
    }

    pub fn head(&self) -> Option<Pos> {
        self.cells.back().copied()
    }

    pub fn tail(&self) -> Option<Pos> {
        self.cells.front().copied()
    }

    pub fn push_head(&mut self, pos: Pos) {
        debug_assert!(
            self.cells.len() < self.capacity,
            "body track is full ({} cells)",
            self.capacity
        );
        self.cells.push_back(pos);
    }

    pub fn pop_tail(&mut self) -> Option<Pos> {
        self.cells.pop_front()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cells.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pos> + '_ {
        self.cells.iter()
    }

    pub fn to_vec(&self) -> Vec<Pos> {
        self.cells.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a BodyTrack {
    type Item = &'a Pos;
    type IntoIter = std::collections::vec_deque::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

// "row col row col ...", tail first
impl fmt::Display for BodyTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for pos in &self.cells {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", pos)?;
            first = false;
        }
        Ok(())
    }
}
