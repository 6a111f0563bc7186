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

use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use cacapalavras::config::Config;
use cacapalavras::grid::Grid;
use cacapalavras::placement::{self, Placement};
use cacapalavras::word_list;
use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

/// Generate a word search puzzle from a list of words
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// File with one word per line
    words: PathBuf,

    /// Number of rows and columns in the grid
    #[arg(short, long)]
    size: Option<usize>,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with the puzzle configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the puzzle as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also print where each word is
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[derive(Serialize)]
struct PuzzleJson<'a> {
    size: usize,
    grid: Vec<String>,
    placements: &'a [Placement],
}

fn puzzle_text(grid: &Grid, placements: &[Placement], solution: bool) -> String {
    let mut text = String::new();

    for row in 0..grid.size() {
        let letters = grid.row(row).chars().map(String::from).collect::<Vec<_>>();
        writeln!(text, "{}", letters.join(" ")).unwrap();
    }

    writeln!(text).unwrap();

    for placement in placements {
        write!(
            text,
            "{} ({})",
            placement.word,
            placement.word.chars().count(),
        ).unwrap();

        if solution {
            for coord in placement.path.iter() {
                write!(text, " {}", coord).unwrap();
            }
        }

        writeln!(text).unwrap();
    }

    text
}

fn puzzle_json(
    grid: &Grid,
    placements: &[Placement],
) -> Result<String, serde_json::Error> {
    let puzzle = PuzzleJson {
        size: grid.size(),
        grid: (0..grid.size()).map(|row| grid.row(row)).collect(),
        placements,
    };

    serde_json::to_string_pretty(&puzzle)
}

fn load_config(args: &Args) -> Result<Config, String> {
    let mut config = match args.config {
        Some(ref filename) => Config::load(filename)
            .map_err(|e| e.to_string())?,
        None => Config::default(),
    };

    if let Some(size) = args.size {
        config.grid_size = size;
    }

    config.validate().map_err(|e| e.to_string())?;

    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();

    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }

    logger.init();

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let mut words = match word_list::load_words(&args.words, config.grid_size)
    {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    debug!("loaded {} words", words.len());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    word_list::shuffle_words(&mut words, &mut rng);

    let (grid, placements) =
        placement::place_with_config(&words, &config, &mut rng);

    if placements.is_empty() {
        eprintln!(
            "{}: none of the words fit in the grid",
            args.words.to_string_lossy(),
        );
        return ExitCode::FAILURE;
    }

    if args.json {
        match puzzle_json(&grid, &placements) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        }
    } else {
        print!("{}", puzzle_text(&grid, &placements, args.solution));
    }

    ExitCode::SUCCESS
}
