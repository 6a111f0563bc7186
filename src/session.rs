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

use std::collections::BTreeSet;
use log::debug;
use rand::Rng;
use serde::Serialize;
use super::config::Config;
use super::directions::Coord;
use super::drag_path::{self, DragPath};
use super::grid::Grid;
use super::matcher;
use super::placement::{self, Placement};
use super::word_list;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Coord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GestureOutcome {
    /// One or more new words were found. `path` is every square that
    /// the drag went over.
    Found {
        words: Vec<FoundWord>,
        path: Vec<Coord>,
    },
    NoMatch {
        path: Vec<Coord>,
    },
}

impl GestureOutcome {
    pub fn path(&self) -> &[Coord] {
        match self {
            GestureOutcome::Found { path, .. } => path.as_slice(),
            GestureOutcome::NoMatch { path } => path.as_slice(),
        }
    }
}

pub struct Session {
    config: Config,
    grid: Grid,
    placements: Vec<Placement>,
    found: BTreeSet<String>,
    drag: DragPath,
    dragging: bool,
}

impl Session {
    /// Shuffles `words` and places them onto a new grid.
    pub fn new<R: Rng + ?Sized>(
        mut words: Vec<String>,
        config: Config,
        rng: &mut R,
    ) -> Session {
        word_list::shuffle_words(&mut words, rng);

        let (grid, placements) =
            placement::place_with_config(&words, &config, rng);

        Session::from_parts(grid, placements, config)
    }

    pub fn from_parts(
        grid: Grid,
        placements: Vec<Placement>,
        config: Config,
    ) -> Session {
        let drag = DragPath::new(grid.size());

        Session {
            config,
            grid,
            placements,
            found: BTreeSet::new(),
            drag,
            dragging: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn found(&self) -> &BTreeSet<String> {
        &self.found
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    /// The distinct placed words in the order they were placed.
    pub fn word_list(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();

        self.placements
            .iter()
            .map(|placement| placement.word.as_str())
            .filter(|&word| seen.insert(word))
            .collect()
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn total_count(&self) -> usize {
        self.word_list().len()
    }

    pub fn is_complete(&self) -> bool {
        self.found_count() >= self.total_count()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_path(&self) -> &[Coord] {
        self.drag.coords()
    }

    /// Starts a new drag at `coord`, dropping any unfinished one.
    pub fn gesture_start(&mut self, coord: Coord) -> bool {
        self.drag.clear();
        // A press outside of the grid doesn’t start a drag
        self.dragging = self.drag.push(coord);
        self.dragging
    }

    /// Extends the drag to `coord` once the pointer has gone far
    /// enough into the square. Returns whether the square was added.
    pub fn gesture_move(
        &mut self,
        coord: Coord,
        x_fraction: f64,
        y_fraction: f64,
    ) -> bool {
        if !self.dragging {
            return false;
        }

        if !drag_path::crosses_threshold(
            self.drag.last(),
            coord,
            x_fraction,
            y_fraction,
            self.config.entry_threshold,
        ) {
            return false;
        }

        self.drag.push(coord)
    }

    /// Finishes the drag and checks it against the placements. This
    /// is also what should happen when the pointer leaves the board.
    pub fn gesture_end(&mut self) -> GestureOutcome {
        self.dragging = false;

        let path = self.drag.take();

        let rule = self.config.match_rule;
        let mut new_words = BTreeSet::new();
        let mut words = Vec::new();

        // Report the squares of the placement that was actually
        // dragged in case the same word was placed more than once
        for placement in self.placements.iter() {
            if self.found.contains(&placement.word)
                || new_words.contains(&placement.word)
                || !matcher::path_matches(&path, &placement.path, rule)
            {
                continue;
            }

            new_words.insert(placement.word.clone());
            words.push(FoundWord {
                word: placement.word.clone(),
                path: placement.path.clone(),
            });
        }

        if words.is_empty() {
            return GestureOutcome::NoMatch { path };
        }

        words.sort_by(|a, b| a.word.cmp(&b.word));

        debug!(
            "found {} ({} of {})",
            new_words.iter().cloned().collect::<Vec<_>>().join(", "),
            self.found.len() + new_words.len(),
            self.total_count(),
        );

        self.found.extend(new_words);

        GestureOutcome::Found { words, path }
    }
}
