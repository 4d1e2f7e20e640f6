use crate::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn from_alive(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// state of this cell in the next generation given its live neighbor count.
    /// survives on 2 or 3, born on exactly 3.
    pub fn evolve(self, neighbors: usize) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// a set of live cells. absence of a position means dead.
pub trait World: Default + Clone + Send + 'static {
    fn get(&self, pos: Pos) -> Cell;
    fn set(&mut self, pos: Pos, cell: Cell);
    fn actives(&self) -> Vec<Pos>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// adds every live cell of `other` to `self`.
    fn union(&mut self, other: &Self) {
        for pos in other.actives() {
            self.set(pos, Cell::Alive);
        }
    }
}

pub use hashed_world::HashedWorld;
mod hashed_world;
