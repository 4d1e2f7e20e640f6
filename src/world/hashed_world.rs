use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::{Cell, Pos, World};

/// sparse world storing only the positions of live cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashedWorld {
    cells: HashSet<Pos, MetroBuildHasher>,
}

impl HashedWorld {
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().copied()
    }
}

impl World for HashedWorld {
    fn get(&self, pos: Pos) -> Cell {
        Cell::from_alive(self.contains(pos))
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        match cell {
            Cell::Alive => self.cells.insert(pos),
            Cell::Dead => self.cells.remove(&pos),
        };
    }

    fn actives(&self) -> Vec<Pos> {
        self.iter().collect()
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn union(&mut self, other: &Self) {
        self.cells.extend(other.iter());
    }
}

impl FromIterator<Pos> for HashedWorld {
    fn from_iter<T: IntoIterator<Item = Pos>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Pos> for HashedWorld {
    fn extend<T: IntoIterator<Item = Pos>>(&mut self, iter: T) {
        self.cells.extend(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;

    #[test]
    fn set_semantics() {
        let mut world = HashedWorld::default();
        world.set(pos!(1, 1), Cell::Alive);
        world.set(pos!(1, 1), Cell::Alive);
        assert_eq!(world.len(), 1);
        assert!(world.get(pos!(1, 1)).is_alive());

        world.set(pos!(1, 1), Cell::Dead);
        assert!(world.is_empty());
        world.set(pos!(9, 9), Cell::Dead);
        assert!(world.is_empty());
    }

    #[test]
    fn negative_and_large_coordinates() {
        let far = pos!(i64::MIN / 2, i64::MAX / 2);
        let world: HashedWorld = [pos!(-1, -1), far].into_iter().collect();
        assert!(world.contains(pos!(-1, -1)));
        assert!(world.contains(far));
        assert!(!world.contains(pos!(0, 0)));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: HashedWorld = [pos!(0, 0), pos!(0, 1), pos!(2, 3)].into_iter().collect();
        let b: HashedWorld = [pos!(2, 3), pos!(0, 0), pos!(0, 1)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn union_merges() {
        let mut a: HashedWorld = [pos!(0, 0)].into_iter().collect();
        let b: HashedWorld = [pos!(0, 0), pos!(5, 5)].into_iter().collect();
        a.union(&b);
        assert_eq!(a.len(), 2);
    }
}
