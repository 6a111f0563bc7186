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

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug)]
pub enum WordListError {
    Io(String, std::io::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WordListError::Io(filename, e) => write!(f, "{}: {}", filename, e),
        }
    }
}

impl std::error::Error for WordListError {}

/// Extracts the candidate words from a list with one word per line.
/// Words are trimmed and converted to uppercase. Empty lines,
/// repeated words and words with more than `max_length` letters are
/// skipped.
pub fn parse_words(text: &str, max_length: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for line in text.lines() {
        let word = line.trim().to_uppercase();

        if word.is_empty() {
            continue;
        }

        if word.chars().count() > max_length {
            debug!("skipping “{}” because it is too long", word);
            continue;
        }

        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    words
}

pub fn shuffle_words<R: Rng + ?Sized>(words: &mut [String], rng: &mut R) {
    words.shuffle(rng);
}

pub fn load_words<P: AsRef<Path>>(
    filename: P,
    max_length: usize,
) -> Result<Vec<String>, WordListError> {
    let filename = filename.as_ref();

    match std::fs::read_to_string(filename) {
        Ok(text) => Ok(parse_words(&text, max_length)),
        Err(e) => Err(WordListError::Io(
            filename.to_string_lossy().into_owned(),
            e,
        )),
    }
}
