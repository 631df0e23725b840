use crate::error::AlphabetError;

/// Wall characters of the reference floor plans.
pub const DEFAULT_DELIMITERS: [char; 5] = ['+', '-', '|', '/', '\\'];

/// Furniture symbols of the reference floor plans.
pub const DEFAULT_FURNITURE: [char; 4] = ['W', 'P', 'S', 'C'];

/// Opens a room title.
pub const TITLE_OPEN: char = '(';

/// Closes a room title.
pub const TITLE_CLOSE: char = ')';

/// Classification of a single floor plan character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Delimiter,
    Furniture(char),
    Whitespace,
    TitleOpen,
    TitleClose,
    Invalid,
}

/// The fixed set of wall and furniture characters a plan is read with.
///
/// Built once and shared read-only by the segmenter and the content parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    delimiters: Vec<char>,
    furniture: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            furniture: DEFAULT_FURNITURE.to_vec(),
        }
    }
}

impl Alphabet {
    /// Creates an alphabet from explicit delimiter and furniture sets.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::Conflict`] if a character is both a delimiter
    /// and furniture, or if a delimiter or furniture symbol is whitespace or
    /// a title parenthesis.
    pub fn new(
        delimiters: impl IntoIterator<Item = char>,
        furniture: impl IntoIterator<Item = char>,
    ) -> Result<Self, AlphabetError> {
        let delimiters = dedup(delimiters);
        let furniture = dedup(furniture);

        for &symbol in delimiters.iter().chain(&furniture) {
            if symbol.is_whitespace() {
                return Err(AlphabetError::Conflict {
                    symbol,
                    reason: "whitespace is reserved",
                });
            }
            if symbol == TITLE_OPEN || symbol == TITLE_CLOSE {
                return Err(AlphabetError::Conflict {
                    symbol,
                    reason: "parentheses delimit room titles",
                });
            }
        }
        if let Some(&symbol) = furniture.iter().find(|c| delimiters.contains(c)) {
            return Err(AlphabetError::Conflict {
                symbol,
                reason: "already used as a wall character",
            });
        }

        Ok(Self {
            delimiters,
            furniture,
        })
    }

    /// Returns a copy of this alphabet with a different furniture set.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Alphabet::new`].
    pub fn with_furniture(
        &self,
        furniture: impl IntoIterator<Item = char>,
    ) -> Result<Self, AlphabetError> {
        Self::new(self.delimiters.iter().copied(), furniture)
    }

    #[must_use]
    pub fn delimiters(&self) -> &[char] {
        &self.delimiters
    }

    #[must_use]
    pub fn furniture(&self) -> &[char] {
        &self.furniture
    }

    #[must_use]
    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    /// Classifies a character for both line splitting and content parsing.
    #[must_use]
    pub fn classify(&self, c: char) -> CharClass {
        if self.is_delimiter(c) {
            CharClass::Delimiter
        } else if self.furniture.contains(&c) {
            CharClass::Furniture(c)
        } else if c == TITLE_OPEN {
            CharClass::TitleOpen
        } else if c == TITLE_CLOSE {
            CharClass::TitleClose
        } else if c.is_whitespace() {
            CharClass::Whitespace
        } else {
            CharClass::Invalid
        }
    }
}

fn dedup(symbols: impl IntoIterator<Item = char>) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for c in symbols {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}
