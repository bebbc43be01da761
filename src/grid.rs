use crate::body::BodyTrack;
use crate::geom::{Pos, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    SnakeBody,
    Fruit,
}

// Row-major. Rebuilt from the body and fruit every tick, never patched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: Size,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: Size) -> Self {
        Grid {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn rebuild(&mut self, body: &BodyTrack, fruit: Option<Pos>) {
        self.cells.fill(Cell::Empty);
        for pos in body {
            self.set(*pos, Cell::SnakeBody);
        }
        if let Some(pos) = fruit {
            self.set(pos, Cell::Fruit);
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size.width.max(1) as usize)
    }

    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Pos> + '_ {
        let width = self.size.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == cell)
            .map(move |(i, _)| Pos::new((i / width) as u16, (i % width) as u16))
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.size
            .contains(pos)
            .then(|| pos.row as usize * self.size.width as usize + pos.col as usize)
    }
}
