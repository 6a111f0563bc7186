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
use std::str::FromStr;
use super::directions::Coord;

// Character used for an empty square in the text representation
const EMPTY_SQUARE: char = '.';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    letters: Vec<Option<char>>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum GridParseError {
    EmptyGrid,
    InvalidCharacter(usize, char),
    LineTooLong(usize),
    LineTooShort(usize),
    NotEnoughLines,
    TooManyLines,
}

impl Grid {
    /// Creates an empty grid. `size * size` must not overflow, so
    /// sizes from a config should be checked with
    /// `Config::validate` first.
    pub fn new(size: usize) -> Grid {
        Grid {
            size,
            letters: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.column < self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.size + coord.column)
    }

    /// Returns the letter at `coord`, or `None` if the square is
    /// empty or out of bounds.
    pub fn at(&self, coord: Coord) -> Option<char> {
        self.index(coord).and_then(|index| self.letters[index])
    }

    pub fn set(&mut self, coord: Coord, letter: char) {
        if let Some(index) = self.index(coord) {
            self.letters[index] = Some(letter);
        }
    }

    pub fn is_full(&self) -> bool {
        self.letters.iter().all(Option::is_some)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;

        (0..size * size).map(move |pos| Coord::new(pos / size, pos % size))
    }

    pub fn row(&self, row: usize) -> String {
        self.letters[row * self.size..(row + 1) * self.size]
            .iter()
            .map(|letter| letter.unwrap_or(EMPTY_SQUARE))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }

            write!(f, "{}", self.row(row))?;
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Grid, GridParseError> {
        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());

        let Some(first_line) = lines.clone().next()
        else {
            return Err(GridParseError::EmptyGrid);
        };

        let size = first_line.chars().count();
        let mut grid = Grid::new(size);
        let mut line_num = 0;

        while let Some(line) = lines.next() {
            if line_num >= size {
                return Err(GridParseError::TooManyLines);
            }

            let mut column = 0;

            for ch in line.chars() {
                if column >= size {
                    return Err(GridParseError::LineTooLong(line_num));
                }

                if ch != EMPTY_SQUARE {
                    if !ch.is_alphabetic() {
                        return Err(GridParseError::InvalidCharacter(
                            line_num,
                            ch,
                        ));
                    }

                    grid.set(Coord::new(line_num, column), ch);
                }

                column += 1;
            }

            if column < size {
                return Err(GridParseError::LineTooShort(line_num));
            }

            line_num += 1;
        }

        if line_num < size {
            Err(GridParseError::NotEnoughLines)
        } else {
            Ok(grid)
        }
    }
}

fn format_character(ch: char, f: &mut fmt::Formatter) -> fmt::Result {
    if ch.is_control() {
        write!(f, "U+{:04x}", ch as u32)
    } else {
        write!(f, "{}", ch)
    }
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridParseError::EmptyGrid => write!(f, "the grid is empty"),
            GridParseError::InvalidCharacter(line_num, ch) => {
                write!(f, "line {}: invalid character: ", line_num + 1)?;
                format_character(*ch, f)
            },
            GridParseError::LineTooLong(line_num) => {
                write!(f, "line {}: line too long", line_num + 1)
            },
            GridParseError::LineTooShort(line_num) => {
                write!(f, "line {}: line too short", line_num + 1)
            },
            GridParseError::NotEnoughLines => write!(f, "not enough lines"),
            GridParseError::TooManyLines => write!(f, "too many lines"),
        }
    }
}

impl std::error::Error for GridParseError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        let grid = "ABC\n\
                    .O.\n\
                    S.L".parse::<Grid>().unwrap();

        assert_eq!(grid.size(), 3);
        assert_eq!(grid.at(Coord::new(0, 0)), Some('A'));
        assert_eq!(grid.at(Coord::new(0, 2)), Some('C'));
        assert_eq!(grid.at(Coord::new(1, 0)), None);
        assert_eq!(grid.at(Coord::new(1, 1)), Some('O'));
        assert_eq!(grid.at(Coord::new(2, 2)), Some('L'));
        assert_eq!(grid.at(Coord::new(3, 0)), None);
        assert!(!grid.is_full());

        assert_eq!(&grid.to_string(), "ABC\n.O.\nS.L");
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Grid>().unwrap_err(), GridParseError::EmptyGrid);
        assert_eq!(
            "AB\nABC".parse::<Grid>().unwrap_err(),
            GridParseError::LineTooLong(1),
        );
        assert_eq!(
            "ABC\nAB\nABC".parse::<Grid>().unwrap_err(),
            GridParseError::LineTooShort(1),
        );
        assert_eq!(
            "AB\nAB\nAB".parse::<Grid>().unwrap_err(),
            GridParseError::TooManyLines,
        );
        assert_eq!(
            "ABC\nABC".parse::<Grid>().unwrap_err(),
            GridParseError::NotEnoughLines,
        );
        assert_eq!(
            "A1\nAB".parse::<Grid>().unwrap_err(),
            GridParseError::InvalidCharacter(0, '1'),
        );

        assert_eq!(
            &GridParseError::InvalidCharacter(2, '\u{7}').to_string(),
            "line 3: invalid character: U+0007",
        );
    }

    #[test]
    fn set_and_coords() {
        let mut grid = Grid::new(2);

        let coords = grid.coords().collect::<Vec<_>>();
        assert_eq!(
            &coords,
            &[
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1),
            ],
        );

        for (i, coord) in coords.into_iter().enumerate() {
            grid.set(coord, char::from(b'W' + i as u8));
        }

        // Out of bounds is ignored
        grid.set(Coord::new(2, 0), 'Q');

        assert!(grid.is_full());
        assert_eq!(&grid.to_string(), "WX\nYZ");
    }
}
