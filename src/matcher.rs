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
use serde::Deserialize;
use super::directions::Coord;
use super::placement::Placement;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    /// The squares of the word must appear in order somewhere in the
    /// drag, but other squares may come before, after or in between.
    /// This lets the drag curve around.
    #[default]
    Subsequence,
    /// The squares of the word must be a consecutive run of the drag.
    Contiguous,
}

fn is_subsequence(drag: &[Coord], path: &[Coord]) -> bool {
    let mut remaining = path.iter().peekable();

    for coord in drag {
        if remaining.next_if_eq(&coord).is_some() && remaining.peek().is_none()
        {
            return true;
        }
    }

    false
}

pub fn path_matches(drag: &[Coord], path: &[Coord], rule: MatchRule) -> bool {
    if path.is_empty() || path.len() > drag.len() {
        return false;
    }

    match rule {
        MatchRule::Subsequence => is_subsequence(drag, path),
        MatchRule::Contiguous => drag.windows(path.len()).any(|w| w == path),
    }
}

/// Returns the words of the placements that are covered by `drag`
/// and aren’t already in `already_found`.
pub fn evaluate_with_rule(
    drag: &[Coord],
    placements: &[Placement],
    already_found: &BTreeSet<String>,
    rule: MatchRule,
) -> BTreeSet<String> {
    placements
        .iter()
        .filter(|placement| !already_found.contains(&placement.word))
        .filter(|placement| path_matches(drag, &placement.path, rule))
        .map(|placement| placement.word.clone())
        .collect()
}

pub fn evaluate(
    drag: &[Coord],
    placements: &[Placement],
    already_found: &BTreeSet<String>,
) -> BTreeSet<String> {
    evaluate_with_rule(drag, placements, already_found, MatchRule::default())
}
