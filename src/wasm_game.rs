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

use wasm_bindgen::prelude::*;
use web_sys::console;
use rand::SeedableRng;
use rand::rngs::StdRng;
use super::config::Config;
use super::directions::Coord;
use super::session::Session;
use super::word_list;

fn show_error(message: &str) {
    console::log_1(&message.into());
}

fn random_seed() -> u64 {
    let high = (js_sys::Math::random() * 4294967296.0) as u64;
    let low = (js_sys::Math::random() * 4294967296.0) as u64;

    (high << 32) | low
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            show_error(&format!("{}", e));
            "null".to_string()
        },
    }
}

/// A puzzle that the page can drive with pointer events. The page
/// is responsible for working out which square is under the pointer
/// and for drawing everything.
#[wasm_bindgen]
pub struct WordSearch {
    session: Session,
}

#[wasm_bindgen]
impl WordSearch {
    #[wasm_bindgen(constructor)]
    pub fn new(words_text: &str, size: usize) -> WordSearch {
        let mut config = Config {
            grid_size: size,
            ..Config::default()
        };

        if let Err(e) = config.validate() {
            show_error(&format!("{}", e));
            config = Config::default();
        }

        let words = word_list::parse_words(words_text, config.grid_size);
        let mut rng = StdRng::seed_from_u64(random_seed());

        WordSearch {
            session: Session::new(words, config, &mut rng),
        }
    }

    pub fn size(&self) -> usize {
        self.session.grid().size()
    }

    pub fn letter(&self, row: usize, column: usize) -> String {
        self.session.grid()
            .at(Coord::new(row, column))
            .map(String::from)
            .unwrap_or_default()
    }

    pub fn placements_json(&self) -> String {
        to_json(&self.session.placements())
    }

    pub fn word_list_json(&self) -> String {
        to_json(&self.session.word_list())
    }

    pub fn gesture_start(&mut self, row: usize, column: usize) -> bool {
        self.session.gesture_start(Coord::new(row, column))
    }

    pub fn gesture_move(
        &mut self,
        row: usize,
        column: usize,
        x_fraction: f64,
        y_fraction: f64,
    ) -> bool {
        self.session.gesture_move(
            Coord::new(row, column),
            x_fraction,
            y_fraction,
        )
    }

    pub fn gesture_end(&mut self) -> String {
        to_json(&self.session.gesture_end())
    }

    pub fn found_count(&self) -> usize {
        self.session.found_count()
    }

    pub fn total_count(&self) -> usize {
        self.session.total_count()
    }
}

#[wasm_bindgen]
pub fn init_cacapalavras() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}
