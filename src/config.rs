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
use std::path::Path;
use serde::Deserialize;
use super::drag_path::DEFAULT_ENTRY_THRESHOLD;
use super::matcher::MatchRule;
use super::placement::{ALPHABET, MAX_START_ATTEMPTS};

pub const DEFAULT_GRID_SIZE: usize = 8;
pub const MAX_GRID_SIZE: usize = 64;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub grid_size: usize,
    /// Fraction of a square that the pointer has to cross from the
    /// edge it entered by before the square is added to the drag.
    pub entry_threshold: f64,
    pub max_start_attempts: usize,
    /// Letters used to fill the squares that aren’t part of a word.
    pub alphabet: String,
    pub match_rule: MatchRule,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String, std::io::Error),
    Json(serde_json::Error),
    InvalidGridSize(usize),
    InvalidThreshold(f64),
    InvalidAttempts,
    EmptyAlphabet,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            grid_size: DEFAULT_GRID_SIZE,
            entry_threshold: DEFAULT_ENTRY_THRESHOLD,
            max_start_attempts: MAX_START_ATTEMPTS,
            alphabet: ALPHABET.to_string(),
            match_rule: MatchRule::default(),
        }
    }
}

impl Config {
    pub fn from_json(source: &str) -> Result<Config, ConfigError> {
        let config = serde_json::from_str::<Config>(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(filename: P) -> Result<Config, ConfigError> {
        let filename = filename.as_ref();

        let source = std::fs::read_to_string(filename).map_err(|e| {
            ConfigError::Io(filename.to_string_lossy().into_owned(), e)
        })?;

        Config::from_json(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }

        if !(0.0..=1.0).contains(&self.entry_threshold) {
            return Err(ConfigError::InvalidThreshold(self.entry_threshold));
        }

        if self.max_start_attempts == 0 {
            return Err(ConfigError::InvalidAttempts);
        }

        if self.alphabet.chars().all(char::is_whitespace) {
            return Err(ConfigError::EmptyAlphabet);
        }

        Ok(())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> ConfigError {
        ConfigError::Json(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(filename, e) => write!(f, "{}: {}", filename, e),
            ConfigError::Json(e) => write!(f, "{}", e),
            ConfigError::InvalidGridSize(size) => {
                write!(
                    f,
                    "grid size {} must be between 1 and {}",
                    size,
                    MAX_GRID_SIZE,
                )
            },
            ConfigError::InvalidThreshold(threshold) => {
                write!(
                    f,
                    "entry threshold {} must be between 0 and 1",
                    threshold,
                )
            },
            ConfigError::InvalidAttempts => {
                write!(f, "the number of start attempts must be at least 1")
            },
            ConfigError::EmptyAlphabet => write!(f, "the alphabet is empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
