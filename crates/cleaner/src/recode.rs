//! Legacy code-page round trip.
//!
//! Some MELD transcripts were exported through a Windows-1252 toolchain and
//! read back as ISO-8859-1, leaving C1 control characters where curly quotes
//! and ellipses used to be. [`latin1_to_cp1252`] undoes that: every char is
//! taken as a Latin-1 byte and decoded again as Windows-1252.
//!
//! The round trip fails when a char does not fit in one Latin-1 byte, or when
//! a byte has no Windows-1252 mapping. Failure leaves the text untouched.

use std::borrow::Cow;

/// Windows-1252 mappings for 0x80..=0x9F. `None` marks the five undefined bytes.
const CP1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

/// Re-decodes `text` as if its Latin-1 bytes were Windows-1252.
///
/// Returns the input unchanged (borrowed) when nothing needs remapping or
/// when the round trip is impossible.
pub fn latin1_to_cp1252(text: &str) -> Cow<'_, str> {
    let mut needs_remap = false;
    for ch in text.chars() {
        let code = ch as u32;
        if code > 0xFF {
            return Cow::Borrowed(text);
        }
        if (0x80..=0x9F).contains(&code) {
            if CP1252_HIGH[(code - 0x80) as usize].is_none() {
                return Cow::Borrowed(text);
            }
            needs_remap = true;
        }
    }

    if !needs_remap {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        let code = ch as u32;
        match code {
            0x80..=0x9F => match CP1252_HIGH[(code - 0x80) as usize] {
                Some(mapped) => out.push(mapped),
                None => out.push(ch),
            },
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_is_borrowed() {
        assert!(matches!(latin1_to_cp1252("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn c1_controls_become_punctuation() {
        assert_eq!(latin1_to_cp1252("it\u{92}s"), "it\u{2019}s");
        assert_eq!(latin1_to_cp1252("wait\u{85}"), "wait\u{2026}");
    }

    #[test]
    fn chars_above_latin1_abort_round_trip() {
        let text = "caf\u{e9} \u{92} \u{4e16}";
        assert_eq!(latin1_to_cp1252(text), text);
    }

    #[test]
    fn undefined_cp1252_byte_aborts_round_trip() {
        let text = "a\u{81}b\u{92}";
        assert_eq!(latin1_to_cp1252(text), text);
    }

    #[test]
    fn latin1_letters_pass_through() {
        assert_eq!(latin1_to_cp1252("na\u{ef}ve\u{93}"), "na\u{ef}ve\u{201C}");
    }
}
