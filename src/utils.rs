use std::ops::{Add, Sub};

/// a cell coordinate on the unbounded plane.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Pos {
    pub row: i64,
    pub col: i64,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        $crate::Pos {
            row: $row,
            col: $col,
        }
    };
}

impl Pos {
    pub const ORIGIN: Pos = pos!(0, 0);

    /// `None` when either axis leaves the `i64` range.
    pub fn checked_add(self, rhs: Pos) -> Option<Pos> {
        Some(pos!(
            self.row.checked_add(rhs.row)?,
            self.col.checked_add(rhs.col)?
        ))
    }

    /// the eight surrounding positions, self excluded. positions past the
    /// edge of the plane are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        self.neighborhood().filter(move |&p| p != self)
    }

    /// the closed 3x3 neighborhood, self included, clipped to the plane.
    pub fn neighborhood(self) -> impl Iterator<Item = Pos> {
        (-1..=1)
            .flat_map(|row| (-1..=1).map(move |col| pos!(row, col)))
            .filter_map(move |offset| self.checked_add(offset))
    }
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.row - rhs.row, self.col - rhs.col)
    }
}
