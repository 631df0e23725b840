mod content;

use std::collections::BTreeMap;
use std::fmt;

/// Rendering of a room that has neither a title nor furniture.
pub const NO_DATA: &str = "(no data)";

/// Title and furniture tally of one room.
///
/// A name, once set, is only ever replaced by a later non-empty name.
/// Counts only grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    name: Option<String>,
    chairs: BTreeMap<char, usize>,
}

impl Room {
    /// Creates an empty room.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty room with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            chairs: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Furniture counts keyed by symbol, in ascending symbol order.
    #[must_use]
    pub fn chairs(&self) -> &BTreeMap<char, usize> {
        &self.chairs
    }

    /// Number of `symbol` pieces in the room.
    #[must_use]
    pub fn count(&self, symbol: char) -> usize {
        self.chairs.get(&symbol).copied().unwrap_or(0)
    }

    /// Total number of furniture pieces in the room.
    #[must_use]
    pub fn total(&self) -> usize {
        self.chairs.values().sum()
    }

    /// Returns `true` if the room has neither a name nor furniture.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.chairs.is_empty()
    }

    /// Folds `other` into this room.
    ///
    /// `other`'s name wins if it has one; counts are added.
    pub fn merge(&mut self, other: &Room) {
        if let Some(name) = &other.name {
            self.name = Some(name.clone());
        }
        for (&symbol, &count) in &other.chairs {
            *self.chairs.entry(symbol).or_insert(0) += count;
        }
    }

    pub(crate) fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub(crate) fn add_chair(&mut self, symbol: char) {
        *self.chairs.entry(symbol).or_insert(0) += 1;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.chairs.is_empty() {
            return f.write_str(self.name.as_deref().unwrap_or(NO_DATA));
        }
        writeln!(f, "{}:", self.name.as_deref().unwrap_or_default())?;
        for (i, (symbol, count)) in self.chairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}: {count}")?;
        }
        Ok(())
    }
}
