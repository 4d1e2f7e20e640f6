use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::{Cell, Pos, World};

/// every position whose state could change: the live cells and their neighbors.
fn possible_change_pos<W>(world: &W) -> HashSet<Pos, MetroBuildHasher>
where
    W: World,
{
    world
        .actives()
        .into_iter()
        .flat_map(Pos::neighborhood)
        .collect()
}

pub fn neighbor_count<W>(world: &W, pos: Pos) -> usize
where
    W: World,
{
    pos.neighbors()
        .filter(|&neighbor| world.get(neighbor).is_alive())
        .count()
}

/// computes the generation following `current`.
pub fn step<W>(current: &W) -> W
where
    W: World,
{
    let mut next = W::default();
    for pos in possible_change_pos(current) {
        let cell = current.get(pos).evolve(neighbor_count(current, pos));
        if cell.is_alive() {
            next.set(pos, Cell::Alive);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{pos, HashedWorld};

    fn world(cells: &[(i64, i64)]) -> HashedWorld {
        cells.iter().map(|&(row, col)| pos!(row, col)).collect()
    }

    #[test]
    fn empty_stays_empty() {
        let empty = HashedWorld::default();
        assert!(step(&step(&empty)).is_empty());
    }

    #[test]
    fn lonely_cell_dies() {
        assert!(step(&world(&[(0, 0)])).is_empty());
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = world(&[(1, 0), (1, 1), (1, 2)]);
        let vertical = world(&[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(step(&horizontal), vertical);
        assert_eq!(step(&vertical), horizontal);
    }

    #[test]
    fn block_is_still() {
        let block = world(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn glider_translates_after_four_steps() {
        let glider = world(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let moved: HashedWorld = glider.iter().map(|p| p + pos!(1, 1)).collect();
        let after = (0..4).fold(glider, |w, _| step(&w));
        assert_eq!(after, moved);
    }

    #[test]
    fn cells_at_the_edge_of_the_plane() {
        assert!(step(&world(&[(i64::MAX, 0)])).is_empty());

        let corner = world(&[
            (i64::MAX - 1, i64::MIN),
            (i64::MAX - 1, i64::MIN + 1),
            (i64::MAX, i64::MIN),
            (i64::MAX, i64::MIN + 1),
        ]);
        assert_eq!(step(&corner), corner);

        let edge_blinker = world(&[(i64::MAX, -1), (i64::MAX, 0), (i64::MAX, 1)]);
        assert_eq!(step(&edge_blinker), world(&[(i64::MAX - 1, 0), (i64::MAX, 0)]));
    }

    #[test]
    fn counts_neighbors_without_self() {
        let block = world(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(neighbor_count(&block, pos!(0, 0)), 3);
        assert_eq!(neighbor_count(&block, pos!(-1, -1)), 1);
        assert_eq!(neighbor_count(&block, pos!(5, 5)), 0);
    }

    #[test]
    fn does_not_mutate_input() {
        let blinker = world(&[(1, 0), (1, 1), (1, 2)]);
        let before = blinker.clone();
        let _ = step(&blinker);
        assert_eq!(blinker, before);
    }

    fn arb_world() -> impl Strategy<Value = HashedWorld> {
        prop::collection::vec((-20i64..20, -20i64..20), 0..64).prop_map(|cells| world(&cells))
    }

    proptest! {
        #[test]
        fn deterministic(w in arb_world()) {
            prop_assert_eq!(step(&w), step(&w.clone()));
        }

        #[test]
        fn births_stay_near_live_cells(w in arb_world()) {
            let next = step(&w);
            for pos in next.iter() {
                prop_assert!(pos.neighborhood().any(|p| w.contains(p)));
            }
        }

        #[test]
        fn translation_invariant(w in arb_world(), dr in -100i64..100, dc in -100i64..100) {
            let offset = pos!(dr, dc);
            let shifted: HashedWorld = w.iter().map(|p| p + offset).collect();
            let expected: HashedWorld = step(&w).iter().map(|p| p + offset).collect();
            prop_assert_eq!(step(&shifted), expected);
        }
    }
}
