//! Range-replacement edits reported by a text input.

use std::ops::Range;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    #[error("Edit range start {start} is past its end {end}")]
    InvalidRange { start: usize, end: usize },
    #[error("Edit range end {end} exceeds text length {len}")]
    OutOfBounds { end: usize, len: usize },
}

/// Replacement of a character range with new text.
///
/// Offsets count characters, not bytes. An empty range is an insertion,
/// an empty replacement is a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl TextEdit {
    pub fn replace(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at..at, text)
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self::replace(range, String::new())
    }

    /// Resolves the edit against `text` and returns the full new text.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the range start is past its end
    /// - the range end is past the last character
    pub fn apply(&self, text: &str) -> Result<String, EditError> {
        let Range { start, end } = self.range;
        if start > end {
            return Err(EditError::InvalidRange { start, end });
        }

        let start_byte = byte_offset(text, start).ok_or(EditError::OutOfBounds {
            end,
            len: text.chars().count(),
        })?;
        let end_byte = byte_offset(text, end).ok_or(EditError::OutOfBounds {
            end,
            len: text.chars().count(),
        })?;

        let mut resolved =
            String::with_capacity(text.len() - (end_byte - start_byte) + self.replacement.len());
        resolved.push_str(&text[..start_byte]);
        resolved.push_str(&self.replacement);
        resolved.push_str(&text[end_byte..]);
        Ok(resolved)
    }
}

/// Byte offset of the `index`-th character; `index == len` maps to the end.
fn byte_offset(text: &str, index: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_end() {
        let edit = TextEdit::insert(3, "d");
        assert_eq!(edit.apply("abc"), Ok("abcd".to_string()));
    }

    #[test]
    fn test_insert_in_middle() {
        let edit = TextEdit::insert(1, "XY");
        assert_eq!(edit.apply("abc"), Ok("aXYbc".to_string()));
    }

    #[test]
    fn test_delete_range() {
        let edit = TextEdit::delete(1..3);
        assert_eq!(edit.apply("abcd"), Ok("ad".to_string()));
    }

    #[test]
    fn test_replace_range() {
        let edit = TextEdit::replace(0..2, "zz");
        assert_eq!(edit.apply("abcd"), Ok("zzcd".to_string()));
    }

    #[test]
    fn test_edit_on_empty_text() {
        let edit = TextEdit::insert(0, "secret");
        assert_eq!(edit.apply(""), Ok("secret".to_string()));
    }

    #[test]
    fn test_offsets_are_characters() {
        let edit = TextEdit::replace(1..2, "e");
        assert_eq!(edit.apply("cäfe"), Ok("cefe".to_string()));
    }

    #[test]
    fn test_inverted_range() {
        let edit = TextEdit::delete(3..1);
        assert_eq!(
            edit.apply("abcd"),
            Err(EditError::InvalidRange { start: 3, end: 1 })
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let edit = TextEdit::replace(2..5, "x");
        assert_eq!(
            edit.apply("abc"),
            Err(EditError::OutOfBounds { end: 5, len: 3 })
        );
    }
}
