// Caçapalavras – A word search game
// Copyright (C) 2024  The Caçapalavras authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;
use serde::Serialize;

pub const N_DIRECTIONS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i32,
    pub dc: i32,
}

// Horizontal and vertical first, then the diagonals
pub static DIRECTIONS: [Direction; N_DIRECTIONS] = [
    Direction { dr: 0, dc: 1 },
    Direction { dr: 1, dc: 0 },
    Direction { dr: 0, dc: -1 },
    Direction { dr: -1, dc: 0 },
    Direction { dr: 1, dc: 1 },
    Direction { dr: 1, dc: -1 },
    Direction { dr: -1, dc: 1 },
    Direction { dr: -1, dc: -1 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    pub fn new(row: usize, column: usize) -> Coord {
        Coord { row, column }
    }

    /// Moves `count` steps in `direction`. Returns `None` if the
    /// result would fall outside of a grid with `size` rows and
    /// columns.
    pub fn step(
        self,
        direction: Direction,
        count: usize,
        size: usize,
    ) -> Option<Coord> {
        let count = count as i64;
        let row = self.row as i64 + direction.dr as i64 * count;
        let column = self.column as i64 + direction.dc as i64 * count;

        if row < 0 || column < 0 || row >= size as i64 || column >= size as i64
        {
            None
        } else {
            Some(Coord::new(row as usize, column as usize))
        }
    }

    /// True if `other` is one of the eight neighbours, ie, the
    /// Chebyshev distance is exactly one.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other
            && self.row.abs_diff(other.row) <= 1
            && self.column.abs_diff(other.column) <= 1
    }

    /// Returns the direction that leads from `self` to `other` if
    /// they are neighbours.
    pub fn direction_to(self, other: Coord) -> Option<Direction> {
        if !self.is_adjacent(other) {
            return None;
        }

        Some(Direction {
            dr: other.row as i32 - self.row as i32,
            dc: other.column as i32 - self.column as i32,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}
