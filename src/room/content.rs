use crate::alphabet::{Alphabet, CharClass};
use crate::error::ContentError;

use super::Room;

impl Room {
    /// Reads a title and furniture from the text inside one segment.
    ///
    /// The last non-empty closed `(title)` in `text` names the fragment.
    /// Anything inside an open title is taken verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::MalformedTitle`] if a title is still open at
    /// the end of `text`, or [`ContentError::UnknownSymbol`] for a character
    /// outside a title that is neither whitespace, a parenthesis, nor
    /// furniture.
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self, ContentError> {
        let mut room = Self::new();
        // `Some` while inside a title.
        let mut title: Option<String> = None;

        for (offset, c) in text.chars().enumerate() {
            let class = alphabet.classify(c);

            if let Some(open) = title.as_mut() {
                match class {
                    CharClass::TitleClose => {
                        let trimmed = open.trim();
                        if !trimmed.is_empty() {
                            room.set_name(Some(trimmed.to_owned()));
                        }
                        title = None;
                    }
                    CharClass::TitleOpen => {}
                    _ => open.push(c),
                }
                continue;
            }

            match class {
                CharClass::TitleOpen => title = Some(String::new()),
                CharClass::TitleClose | CharClass::Whitespace => {}
                CharClass::Furniture(symbol) => room.add_chair(symbol),
                CharClass::Delimiter | CharClass::Invalid => {
                    return Err(ContentError::UnknownSymbol { symbol: c, offset });
                }
            }
        }

        if let Some(open) = title {
            return Err(ContentError::MalformedTitle {
                title: open.trim().to_owned(),
            });
        }

        Ok(room)
    }
}
