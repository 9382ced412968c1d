// src/codec/character.rs

use crate::core::ALPHABET_SIZE;

/// Maps a lowercase letter onto its 1-based alphabet position (`a` -> 1, `z` -> 26).
///
/// Code 0 is reserved for padding. The caller guarantees `c` is in `a..=z`;
/// [`crate::codec::VectorBuilder`] validates names before they reach here.
pub fn char_to_code(c: char) -> u8 {
    debug_assert!(c.is_ascii_lowercase(), "char_to_code called with {c:?}");
    (c as u8) - b'a' + 1
}

/// Inverse of [`char_to_code`]. Returns `None` for 0 and anything above 26.
pub fn code_to_char(code: u8) -> Option<char> {
    match code {
        1..=ALPHABET_SIZE => Some((b'a' + code - 1) as char),
        _ => None,
    }
}
