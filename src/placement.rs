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

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use super::config::{Config, MAX_GRID_SIZE};
use super::directions::{Coord, Direction, DIRECTIONS};
use super::grid::Grid;

// Number of random start squares to try for each direction before
// giving up on the direction
pub const MAX_START_ATTEMPTS: usize = 50;

pub static ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub word: String,
    pub path: Vec<Coord>,
}

impl Placement {
    pub fn contains(&self, coord: Coord) -> bool {
        self.path.contains(&coord)
    }

    /// The step between consecutive squares, or `None` for
    /// single-letter words.
    pub fn direction(&self) -> Option<Direction> {
        match self.path.as_slice() {
            [first, second, ..] => first.direction_to(*second),
            _ => None,
        }
    }
}

/// Checks whether `word` fits at `start` going in `direction`
/// without disagreeing with any letter already in the grid. Returns
/// the squares that the word would cover.
pub fn can_place(
    grid: &Grid,
    word: &str,
    start: Coord,
    direction: Direction,
) -> Option<Vec<Coord>> {
    let mut path = Vec::new();

    for (i, ch) in word.chars().enumerate() {
        let coord = start.step(direction, i, grid.size())?;

        if let Some(existing) = grid.at(coord) {
            if existing != ch {
                return None;
            }
        }

        path.push(coord);
    }

    (!path.is_empty()).then_some(path)
}

fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    max_start_attempts: usize,
    rng: &mut R,
) -> Option<Placement> {
    let size = grid.size();

    if size == 0 {
        return None;
    }

    let mut directions = DIRECTIONS;
    directions.shuffle(rng);

    for direction in directions {
        for _ in 0..max_start_attempts {
            let start = Coord::new(rng.gen_range(0..size), rng.gen_range(0..size));

            if let Some(path) = can_place(grid, word, start, direction) {
                for (coord, ch) in path.iter().zip(word.chars()) {
                    grid.set(*coord, ch);
                }

                return Some(Placement {
                    word: word.to_string(),
                    path,
                });
            }
        }
    }

    None
}

/// Places each word in turn onto `grid`. Words that can’t be placed
/// are left out of the result.
pub fn place_words<R: Rng + ?Sized>(
    grid: &mut Grid,
    words: &[String],
    max_start_attempts: usize,
    rng: &mut R,
) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(words.len());

    for word in words {
        match place_word(grid, word, max_start_attempts, rng) {
            Some(placement) => placements.push(placement),
            None => debug!("couldn’t place “{}”", word),
        }
    }

    placements
}

/// Fills every empty square with a random letter from `alphabet`.
pub fn fill_empty<R: Rng + ?Sized>(
    grid: &mut Grid,
    alphabet: &[char],
    rng: &mut R,
) {
    if alphabet.is_empty() {
        return;
    }

    for coord in grid.coords().collect::<Vec<_>>() {
        if grid.at(coord).is_none() {
            grid.set(coord, alphabet[rng.gen_range(0..alphabet.len())]);
        }
    }
}

pub fn place_with_config<R: Rng + ?Sized>(
    words: &[String],
    config: &Config,
    rng: &mut R,
) -> (Grid, Vec<Placement>) {
    // Unvalidated configs could otherwise ask for an enormous grid
    let mut grid = Grid::new(config.grid_size.min(MAX_GRID_SIZE));

    let placements = place_words(
        &mut grid,
        words,
        config.max_start_attempts,
        rng,
    );

    // The filler letters must only be added once all of the words
    // are placed
    let alphabet = config.alphabet
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<Vec<char>>();
    fill_empty(&mut grid, &alphabet, rng);

    info!(
        "placed {} of {} words on a {}×{} grid",
        placements.len(),
        words.len(),
        grid.size(),
        grid.size(),
    );

    (grid, placements)
}

pub fn place<R: Rng + ?Sized>(
    words: &[String],
    grid_size: usize,
    rng: &mut R,
) -> (Grid, Vec<Placement>) {
    let config = Config {
        grid_size,
        ..Config::default()
    };

    place_with_config(words, &config, rng)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    static TEST_WORDS: [&'static str; 12] = [
        "SOL", "SAL", "LUA", "MAR", "CASA", "GATO", "PEDRA", "FOGO",
        "ARVORE", "CAMINHO", "JANELAS", "VENTO",
    ];

    fn test_words() -> Vec<String> {
        TEST_WORDS.iter().map(|w| w.to_string()).collect()
    }

    fn check_placement(grid: &Grid, placement: &Placement) {
        assert_eq!(placement.path.len(), placement.word.chars().count());

        for (coord, ch) in placement.path.iter().zip(placement.word.chars()) {
            assert!(grid.contains(*coord));
            assert_eq!(grid.at(*coord), Some(ch));
        }

        if let Some(direction) = placement.direction() {
            assert!(DIRECTIONS.contains(&direction));

            for pair in placement.path.windows(2) {
                assert_eq!(pair[0].direction_to(pair[1]), Some(direction));
            }
        }
    }

    fn check_merge(placements: &[Placement]) {
        let mut letters = HashMap::<Coord, char>::new();

        for placement in placements {
            for (coord, ch) in placement.path.iter().zip(placement.word.chars())
            {
                let existing = *letters.entry(*coord).or_insert(ch);
                assert_eq!(existing, ch, "conflict at {}", coord);
            }
        }
    }

    #[test]
    fn valid_placements() {
        let words = test_words();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (grid, placements) = place(&words, 8, &mut rng);

            assert!(!placements.is_empty());
            assert!(placements.len() <= words.len());

            for placement in placements.iter() {
                assert!(words.contains(&placement.word));
                check_placement(&grid, placement);
            }

            check_merge(&placements);

            assert!(grid.is_full());
            assert!(grid.coords().all(|coord| {
                ALPHABET.contains(grid.at(coord).unwrap())
            }));
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let words = test_words();

        let a = place(&words, 8, &mut StdRng::seed_from_u64(42));
        let b = place(&words, 8, &mut StdRng::seed_from_u64(42));

        assert_eq!(a, b);
    }

    #[test]
    fn merge_overlap() {
        let grid = "SOL\n\
                    ...\n\
                    ...".parse::<Grid>().unwrap();

        // Rightwards would need an A where the O is
        assert_eq!(
            can_place(&grid, "SAL", Coord::new(0, 0), DIRECTIONS[0]),
            None,
        );

        // Downwards shares the S
        assert_eq!(
            can_place(&grid, "SAL", Coord::new(0, 0), DIRECTIONS[1]),
            Some(vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]),
        );

        // Falls off the bottom
        assert_eq!(
            can_place(&grid, "SAL", Coord::new(1, 0), DIRECTIONS[1]),
            None,
        );
    }

    #[test]
    fn retry_after_conflict() {
        let sol = "SOL\n\
                   ...\n\
                   ...".parse::<Grid>().unwrap();
        let sol_placement = Placement {
            word: "SOL".to_string(),
            path: vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
        };

        for seed in 0..10 {
            let mut grid = sol.clone();
            let mut rng = StdRng::seed_from_u64(seed);

            let placements = place_words(
                &mut grid,
                &["SAL".to_string()],
                MAX_START_ATTEMPTS,
                &mut rng,
            );

            assert_eq!(placements.len(), 1);
            check_placement(&grid, &placements[0]);
            check_placement(&grid, &sol_placement);
            check_merge(&[sol_placement.clone(), placements[0].clone()]);
        }
    }

    #[test]
    fn unplaceable() {
        let mut rng = StdRng::seed_from_u64(1);

        // Too long for the grid
        let (grid, placements) = place(&["ABC".to_string()], 2, &mut rng);
        assert!(placements.is_empty());
        assert!(grid.is_full());

        // Every square disagrees
        let mut grid = "XX\nXX".parse::<Grid>().unwrap();
        let placements = place_words(
            &mut grid,
            &["AB".to_string(), "".to_string(), "XX".to_string()],
            MAX_START_ATTEMPTS,
            &mut rng,
        );
        assert_eq!(placements.len(), 1);
        assert_eq!(&placements[0].word, "XX");
        assert_eq!(&grid.to_string(), "XX\nXX");
    }

    #[test]
    fn fill_keeps_letters() {
        let mut grid = "S.\n.L".parse::<Grid>().unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        fill_empty(&mut grid, &['Q'], &mut rng);

        assert_eq!(&grid.to_string(), "SQ\nQL");
    }

    #[test]
    fn custom_alphabet() {
        let config = Config {
            grid_size: 5,
            alphabet: "XY".to_string(),
            ..Config::default()
        };
        let mut rng = StdRng::seed_from_u64(7);

        let (grid, placements) = place_with_config(&[], &config, &mut rng);

        assert!(placements.is_empty());
        assert_eq!(grid.size(), 5);
        assert!(grid.coords().all(|coord| {
            matches!(grid.at(coord), Some('X') | Some('Y'))
        }));
    }

    #[test]
    fn oversized_grid() {
        let mut rng = StdRng::seed_from_u64(13);
        let (grid, placements) =
            place(&["SOL".to_string()], usize::MAX, &mut rng);

        assert_eq!(grid.size(), MAX_GRID_SIZE);
        assert_eq!(placements.len(), 1);
        check_placement(&grid, &placements[0]);
        assert!(grid.is_full());
    }

    #[test]
    fn single_letter() {
        let mut rng = StdRng::seed_from_u64(9);
        let (grid, placements) = place(&["A".to_string()], 3, &mut rng);

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].path.len(), 1);
        assert_eq!(placements[0].direction(), None);
        assert_eq!(grid.at(placements[0].path[0]), Some('A'));
    }
}
