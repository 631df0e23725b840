use crate::alphabet::{Alphabet, CharClass};

use super::Segment;

/// Splits one line into the interior runs bounded by wall characters.
///
/// Text before the first wall and text after the last wall is never part
/// of a segment, so a line needs two walls to produce anything. Columns
/// are counted in chars.
#[must_use]
pub fn split(line: &str, alphabet: &Alphabet) -> Vec<Segment> {
    let chars: Vec<char> = line.chars().collect();
    let mut segments = Vec::new();
    // Column right after the most recent wall; `None` until the first wall.
    let mut start: Option<usize> = None;

    for (i, &c) in chars.iter().enumerate() {
        if alphabet.classify(c) != CharClass::Delimiter {
            continue;
        }
        if let Some(s) = start {
            if i > s {
                let raw: String = chars[s..i].iter().collect();
                let content = raw.trim_matches(|c: char| alphabet.is_delimiter(c));
                segments.push(Segment::new(s, content));
            }
        }
        start = Some(i + 1);
    }

    segments
}
