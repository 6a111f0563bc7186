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

use std::cmp::Ordering;
use std::collections::HashSet;
use super::directions::Coord;

pub const DEFAULT_ENTRY_THRESHOLD: f64 = 0.5;

/// The squares visited so far during a single drag gesture.
#[derive(Debug, Clone)]
pub struct DragPath {
    grid_size: usize,
    coords: Vec<Coord>,
    visited: HashSet<Coord>,
}

impl DragPath {
    pub fn new(grid_size: usize) -> DragPath {
        DragPath {
            grid_size,
            coords: Vec::new(),
            visited: HashSet::new(),
        }
    }

    /// Appends `coord` if it is in the grid, hasn’t already been
    /// visited and is next to the last square. Returns whether the
    /// square was added.
    pub fn push(&mut self, coord: Coord) -> bool {
        if coord.row >= self.grid_size
            || coord.column >= self.grid_size
            || self.visited.contains(&coord)
        {
            return false;
        }

        if let Some(&last) = self.coords.last() {
            if !last.is_adjacent(coord) {
                return false;
            }
        }

        self.coords.push(coord);
        self.visited.insert(coord);

        true
    }

    pub fn clear(&mut self) {
        self.coords.clear();
        self.visited.clear();
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn last(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.visited.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn take(&mut self) -> Vec<Coord> {
        self.visited.clear();
        std::mem::take(&mut self.coords)
    }
}

fn axis_crossed(from: usize, to: usize, fraction: f64, threshold: f64) -> bool {
    match to.cmp(&from) {
        // Entered by the left or top edge
        Ordering::Greater => fraction >= threshold,
        // Entered by the right or bottom edge
        Ordering::Less => fraction <= 1.0 - threshold,
        Ordering::Equal => true,
    }
}

/// Decides whether the pointer has gone far enough into the square
/// at `to` to count as entering it. `x_fraction` and `y_fraction` are
/// the position of the pointer within the square, where 0 is the
/// left or top edge and 1 is the right or bottom edge. `from` is the
/// last square in the drag and determines which edge the pointer
/// came in by. The first square of a drag is always entered.
pub fn crosses_threshold(
    from: Option<Coord>,
    to: Coord,
    x_fraction: f64,
    y_fraction: f64,
    threshold: f64,
) -> bool {
    let Some(from) = from
    else {
        return true;
    };

    axis_crossed(from.column, to.column, x_fraction, threshold)
        && axis_crossed(from.row, to.row, y_fraction, threshold)
}
