// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/charset.rs - Calculator character set tables.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/*!
 * # `charset` Module
 *
 * Per-model mappings from an 8-bit calculator character code to ASCII,
 * ISO 8859-1 (Latin-1) and Unicode.
 *
 * There are four charsets:
 *
 * - [Charset::Ti82]: TI-82.
 * - [Charset::Ti83]: TI-73, TI-83, TI-83+ and TI-84+.
 * - [Charset::Ti85]: TI-85 and TI-86.
 * - [Charset::Ti9x]: TI-89, TI-92, TI-92+ and V200.
 *
 * The 8x charsets keep digits at 0x80..0x89 (used for subscripts in names
 * like "L1"), accented letters at 0x8A..0xB5 and Greek letters above that.
 * The 9x charset is ASCII below 0x80, Greek at 0x80..0x94 and Latin-1 from
 * 0xA0 upwards. Codes with no representation in a target map to `_`.
 *
 * ```
 * use tivarname::charset::Charset;
 *
 * assert_eq!(Charset::Ti83.to_ascii(0x81), b'1');
 * assert_eq!(Charset::Ti83.to_latin1(0x8A), 0xC1);
 * assert_eq!(Charset::Ti9x.to_unicode(0x80), 'α');
 * ```
 */

/// Substitute for codes that have no representation in the target.
pub const PLACEHOLDER: u8 = b'_';

/// A calculator character set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Charset {
    Ti82,
    Ti83,
    Ti85,
    Ti9x,
}

/// One row of a charset table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharsetEntry {
    /// The calculator character code.
    pub code: u8,
    /// The ASCII byte, or `_`.
    pub ascii: u8,
    /// The Latin-1 byte, or `_`.
    pub latin1: u8,
    /// The Unicode character, or `_`.
    pub unicode: char,
}

impl Charset {
    pub fn name(self) -> &'static str {
        match self {
            Charset::Ti82 => "TI-82",
            Charset::Ti83 => "TI-83",
            Charset::Ti85 => "TI-85",
            Charset::Ti9x => "TI-9x",
        }
    }

    /// Maps a character code to an ASCII byte.
    pub fn to_ascii(self, code: u8) -> u8 {
        match self {
            Charset::Ti82 => ti8x_to_ascii(code, &TI82_LETTERS),
            Charset::Ti83 => ti8x_to_ascii(code, &TI83_LETTERS),
            Charset::Ti85 => ti8x_to_ascii(code, &[]),
            Charset::Ti9x => printable_or_placeholder(code),
        }
    }

    /// Maps a character code to a Latin-1 byte.
    pub fn to_latin1(self, code: u8) -> u8 {
        match self {
            Charset::Ti82 => ti8x_to_latin1(code, &TI82_LETTERS),
            Charset::Ti83 => ti8x_to_latin1(code, &TI83_LETTERS),
            Charset::Ti85 => ti8x_to_latin1(code, &TI85_LETTERS),
            Charset::Ti9x => match code {
                0x80..=0x94 => TI9X_GREEK_ASCII[usize::from(code - 0x80)],
                0xA0..=0xFF => code,
                _ => printable_or_placeholder(code),
            },
        }
    }

    /// Maps a character code to a Unicode character.
    ///
    /// Every character returned is below U+0800, so it encodes to at most two
    /// UTF-8 bytes.
    pub fn to_unicode(self, code: u8) -> char {
        match self {
            Charset::Ti82 => TI82_UNICODE[usize::from(code)],
            Charset::Ti83 => TI83_UNICODE[usize::from(code)],
            Charset::Ti85 => TI85_UNICODE[usize::from(code)],
            Charset::Ti9x => match code {
                0x00..=0x7F | 0xA0..=0xFF => char::from(code),
                0x80..=0x94 => TI9X_GREEK_UNICODE[usize::from(code - 0x80)],
                _ => char::from(PLACEHOLDER),
            },
        }
    }

    /// Iterates over the mappings of all 256 character codes.
    pub fn entries(self) -> impl Iterator<Item = CharsetEntry> {
        (0..=u8::MAX).map(move |code| CharsetEntry {
            code,
            ascii: self.to_ascii(code),
            latin1: self.to_latin1(code),
            unicode: self.to_unicode(code),
        })
    }
}

fn printable_or_placeholder(code: u8) -> u8 {
    if (0x20..0x80).contains(&code) {
        code
    } else {
        PLACEHOLDER
    }
}

fn lookup(letters: &[(u8, u8)], code: u8) -> Option<u8> {
    letters.iter().find(|(c, _)| *c == code).map(|(_, l)| *l)
}

fn ti8x_to_ascii(code: u8, letters: &[(u8, u8)]) -> u8 {
    match code {
        0x80..=0x89 => b'0' + (code - 0x80),
        _ => lookup(letters, code).unwrap_or_else(|| printable_or_placeholder(code)),
    }
}

fn ti8x_to_latin1(code: u8, letters: &[(u8, u8)]) -> u8 {
    match code {
        0x80..=0x89 => b'0' + (code - 0x80),
        // Every accented letter is below U+0100.
        0x8A..=0xB5 => TI8X_ACCENTS[usize::from(code - 0x8A)] as u8,
        _ => lookup(letters, code).unwrap_or_else(|| printable_or_placeholder(code)),
    }
}

// Codes that have a plain ASCII stand-in: subscript n, u, v, w and the
// matrix bracket.
const TI82_LETTERS: [(u8, u8); 2] = [(0xC1, b'['), (0xD7, b'n')];
const TI83_LETTERS: [(u8, u8); 5] = [
    (0x01, b'n'),
    (0x02, b'u'),
    (0x03, b'v'),
    (0x04, b'w'),
    (0xC1, b'['),
];
// The TI-85 only gets its subscript n in Latin-1 output. 0xC1 is theta here.
const TI85_LETTERS: [(u8, u8); 1] = [(0xD7, b'n')];

/// Accented letters at 0x8A..=0xB5, shared by all 8x charsets.
#[rustfmt::skip]
const TI8X_ACCENTS: [char; 44] = [
    'Á', 'À', 'Â', 'Ä', 'á', 'à', 'â', 'ä',
    'É', 'È', 'Ê', 'Ë', 'é', 'è', 'ê', 'ë',
    'Í', 'Ì', 'Î', 'Ï', 'í', 'ì', 'î', 'ï',
    'Ó', 'Ò', 'Ô', 'Ö', 'ó', 'ò', 'ô', 'ö',
    'Ú', 'Ù', 'Û', 'Ü', 'ú', 'ù', 'û', 'ü',
    'Ç', 'ç', 'Ñ', 'ñ',
];

/// Greek letters at 0x80..=0x94 of the 9x charset.
#[rustfmt::skip]
const TI9X_GREEK_UNICODE: [char; 21] = [
    'α', 'β', 'Γ', 'γ', 'Δ', 'δ', 'ε', 'ζ',
    'θ', 'λ', 'ξ', 'Π', 'π', 'ρ', 'Σ', 'σ',
    'τ', 'ϕ', 'Ψ', 'Ω', 'ω',
];

/// ASCII look-alikes for [TI9X_GREEK_UNICODE], used for Latin-1 output.
#[rustfmt::skip]
const TI9X_GREEK_ASCII: [u8; 21] = [
    b'a', b'b', b'G', b'g', b'D', b'd', b'e', b'z',
    b'o', b'l', b'x', b'P', b'p', b'r', b'S', b's',
    b't', b'f', b'i', b'W', b'w',
];

#[rustfmt::skip]
const TI82_UNICODE: [char; 256] = [
    '_', '_', '_', '_', '_', '_', '_', '_', // 0x00
    '_', '_', '_', '_', '_', '_', '_', '_', // 0x08
    '_', '_', '_', '_', '_', '_', '_', '_', // 0x10
    '_', '_', '_', '_', '_', '_', '_', '_', // 0x18
    ' ', '!', '"', '#', '_', '%', '&', '\'', // 0x20
    '(', ')', '*', '+', ',', '-', '.', '/', // 0x28
    '0', '1', '2', '3', '4', '5', '6', '7', // 0x30
    '8', '9', ':', ';', '<', '=', '>', '?', // 0x38
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0x40
    'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', // 0x48
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', // 0x50
    'X', 'Y', 'Z', 'θ', '\\', ']', '^', '_', // 0x58
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x60
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', // 0x68
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', // 0x70
    'x', 'y', 'z', '{', '|', '}', '~', '=', // 0x78
    '0', '1', '2', '3', '4', '5', '6', '7', // 0x80
    '8', '9', 'Á', 'À', 'Â', 'Ä', 'á', 'à', // 0x88
    'â', 'ä', 'É', 'È', 'Ê', 'Ë', 'é', 'è', // 0x90
    'ê', 'ë', 'Í', 'Ì', 'Î', 'Ï', 'í', 'ì', // 0x98
    'î', 'ï', 'Ó', 'Ò', 'Ô', 'Ö', 'ó', 'ò', // 0xA0
    'ô', 'ö', 'Ú', 'Ù', 'Û', 'Ü', 'ú', 'ù', // 0xA8
    'û', 'ü', 'Ç', 'ç', 'Ñ', 'ñ', '\'', '`', // 0xB0
    '¨', '¿', '¡', 'α', 'β', 'γ', 'Δ', 'δ', // 0xB8
    'ε', '[', 'λ', 'μ', 'π', 'ρ', 'Σ', 'σ', // 0xC0
    'τ', 'ϕ', 'Ω', 'x', 'y', '_', '_', '_', // 0xC8
    '_', '_', '_', '_', '_', '_', '_', 'η', // 0xD0
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xD8
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xE0
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xE8
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xF0
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xF8
];

#[rustfmt::skip]
const TI83_UNICODE: [char; 256] = [
    'η', 'u', 'v', 'w', '_', '_', '_', '_', // 0x00
    '_', 'X', '_', '_', '_', '_', '_', 'F', // 0x08
    '_', '_', '_', '_', '_', '_', '_', '_', // 0x10
    '_', '_', '_', '_', '_', '_', '_', '_', // 0x18
    ' ', '!', '"', '#', '_', '%', '&', '\'', // 0x20
    '(', ')', '*', '+', ',', '-', '.', '/', // 0x28
    '0', '1', '2', '3', '4', '5', '6', '7', // 0x30
    '8', '9', ':', ';', '<', '=', '>', '?', // 0x38
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0x40
    'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', // 0x48
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', // 0x50
    'X', 'Y', 'Z', 'θ', '\\', ']', '^', '_', // 0x58
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x60
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', // 0x68
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', // 0x70
    'x', 'y', 'z', '{', '|', '}', '~', '=', // 0x78
    '0', '1', '2', '3', '4', '5', '6', '7', // 0x80
    '8', '9', 'Á', 'À', 'Â', 'Ä', 'á', 'à', // 0x88
    'â', 'ä', 'É', 'È', 'Ê', 'Ë', 'é', 'è', // 0x90
    'ê', 'ë', 'Í', 'Ì', 'Î', 'Ï', 'í', 'ì', // 0x98
    'î', 'ï', 'Ó', 'Ò', 'Ô', 'Ö', 'ó', 'ò', // 0xA0
    'ô', 'ö', 'Ú', 'Ù', 'Û', 'Ü', 'ú', 'ù', // 0xA8
    'û', 'ü', 'Ç', 'ç', 'Ñ', 'ñ', '\'', '`', // 0xB0
    '¨', '¿', '¡', 'α', 'β', 'γ', 'Δ', 'δ', // 0xB8
    'ε', '[', 'λ', 'μ', 'π', 'ρ', 'Σ', 'σ', // 0xC0
    'τ', 'ϕ', 'Ω', 'x', 'y', '_', '_', '_', // 0xC8
    '_', '_', '_', '_', '_', '_', '_', 'η', // 0xD0
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xD8
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xE0
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xE8
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xF0
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xF8
];

#[rustfmt::skip]
const TI85_UNICODE: [char; 256] = [
    'η', 'u', 'v', 'w', '_', '_', '_', '_', // 0x00
    '_', 'X', '_', '_', '_', '_', '_', 'F', // 0x08
    '_', '_', '_', '_', '_', '_', '_', '_', // 0x10
    '_', '_', '_', '_', '_', '_', '_', '_', // 0x18
    ' ', '!', '"', '#', '_', '%', '&', '\'', // 0x20
    '(', ')', '*', '+', ',', '-', '.', '/', // 0x28
    '0', '1', '2', '3', '4', '5', '6', '7', // 0x30
    '8', '9', ':', ';', '<', '=', '>', '?', // 0x38
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0x40
    'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', // 0x48
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', // 0x50
    'X', 'Y', 'Z', '[', '\\', ']', '^', '_', // 0x58
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x60
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', // 0x68
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', // 0x70
    'x', 'y', 'z', '{', '|', '}', '~', '=', // 0x78
    '0', '1', '2', '3', '4', '5', '6', '7', // 0x80
    '8', '9', 'Á', 'À', 'Â', 'Ä', 'á', 'à', // 0x88
    'â', 'ä', 'É', 'È', 'Ê', 'Ë', 'é', 'è', // 0x90
    'ê', 'ë', 'Í', 'Ì', 'Î', 'Ï', 'í', 'ì', // 0x98
    'î', 'ï', 'Ó', 'Ò', 'Ô', 'Ö', 'ó', 'ò', // 0xA0
    'ô', 'ö', 'Ú', 'Ù', 'Û', 'Ü', 'ú', 'ù', // 0xA8
    'û', 'ü', 'Ç', 'ç', 'Ñ', 'ñ', '\'', '`', // 0xB0
    '¨', '¿', '¡', 'α', 'β', 'γ', 'Δ', 'δ', // 0xB8
    'ε', 'θ', 'λ', 'μ', 'π', 'ρ', 'Σ', 'σ', // 0xC0
    'τ', 'ϕ', 'Ω', 'x', 'y', '_', '_', '_', // 0xC8
    '_', '_', '_', '_', '_', '_', '_', 'η', // 0xD0
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xD8
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xE0
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xE8
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xF0
    '_', '_', '_', '_', '_', '_', '_', '_', // 0xF8
];

const fn max_code_point(table: &[char]) -> u32 {
    let mut max = 0;
    let mut i = 0;
    while i < table.len() {
        let c = table[i] as u32;
        if c > max {
            max = c;
        }
        i += 1;
    }
    max
}

// UTF-8 output never needs more than two bytes per character.
const _: () = assert!(max_code_point(&TI82_UNICODE) < 0x800);
const _: () = assert!(max_code_point(&TI83_UNICODE) < 0x800);
const _: () = assert!(max_code_point(&TI85_UNICODE) < 0x800);
const _: () = assert!(max_code_point(&TI9X_GREEK_UNICODE) < 0x800);
const _: () = assert!(max_code_point(&TI8X_ACCENTS) < 0x100);

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Charset; 4] = [Charset::Ti82, Charset::Ti83, Charset::Ti85, Charset::Ti9x];

    #[test]
    fn test_printable_ascii_passes_through() {
        for charset in ALL {
            for code in b'A'..=b'Z' {
                assert_eq!(charset.to_ascii(code), code);
                assert_eq!(charset.to_latin1(code), code);
                assert_eq!(charset.to_unicode(code), char::from(code));
            }
        }
    }

    #[test]
    fn test_ti8x_digits() {
        for charset in [Charset::Ti82, Charset::Ti83, Charset::Ti85] {
            for (i, code) in (0x80..=0x89).enumerate() {
                let digit = b'0' + i as u8;
                assert_eq!(charset.to_ascii(code), digit);
                assert_eq!(charset.to_latin1(code), digit);
                assert_eq!(charset.to_unicode(code), char::from(digit));
            }
        }
    }

    #[test]
    fn test_ti8x_accents() {
        for charset in [Charset::Ti82, Charset::Ti83, Charset::Ti85] {
            assert_eq!(charset.to_ascii(0x8A), PLACEHOLDER);
            assert_eq!(charset.to_latin1(0x8A), 0xC1);
            assert_eq!(charset.to_unicode(0x8A), 'Á');
            assert_eq!(charset.to_latin1(0x95), 0xCB);
            assert_eq!(charset.to_unicode(0x96), 'é');
            assert_eq!(charset.to_latin1(0xB5), 0xF1);
            assert_eq!(charset.to_unicode(0xB5), 'ñ');

            // Latin-1 and Unicode agree over the whole accent block.
            for code in 0x8A..=0xB5 {
                assert_eq!(u32::from(charset.to_latin1(code)), charset.to_unicode(code) as u32);
            }
        }
    }

    #[test]
    fn test_ti8x_differences() {
        assert_eq!(Charset::Ti82.to_unicode(0x5B), 'θ');
        assert_eq!(Charset::Ti83.to_unicode(0x5B), 'θ');
        assert_eq!(Charset::Ti85.to_unicode(0x5B), '[');
        assert_eq!(Charset::Ti85.to_unicode(0xC1), 'θ');
        assert_eq!(Charset::Ti83.to_unicode(0xC1), '[');

        assert_eq!(Charset::Ti82.to_unicode(0x00), '_');
        assert_eq!(Charset::Ti83.to_unicode(0x00), 'η');

        assert_eq!(Charset::Ti83.to_ascii(0x02), b'u');
    }

    #[test]
    fn test_ti8x_subscript_n() {
        assert_eq!(Charset::Ti82.to_ascii(0xD7), b'n');
        assert_eq!(Charset::Ti82.to_latin1(0xD7), b'n');
        assert_eq!(Charset::Ti82.to_unicode(0xD7), 'η');
        assert_eq!(Charset::Ti82.to_ascii(0xD8), PLACEHOLDER);
        assert_eq!(Charset::Ti85.to_ascii(0xD7), PLACEHOLDER);
        assert_eq!(Charset::Ti85.to_latin1(0xD7), b'n');
    }

    #[test]
    fn test_ti8x_matrix_bracket() {
        for charset in [Charset::Ti82, Charset::Ti83] {
            assert_eq!(charset.to_ascii(0xC1), b'[');
            assert_eq!(charset.to_latin1(0xC1), b'[');
            assert_eq!(charset.to_unicode(0xC1), '[');
        }
        assert_eq!(Charset::Ti85.to_ascii(0xC1), PLACEHOLDER);
        assert_eq!(Charset::Ti85.to_latin1(0xC1), PLACEHOLDER);
    }

    #[test]
    fn test_names() {
        assert_eq!(Charset::Ti83.name(), "TI-83");
        assert_eq!(Charset::Ti9x.name(), "TI-9x");
    }

    #[test]
    fn test_ti9x() {
        let charset = Charset::Ti9x;

        assert_eq!(charset.to_ascii(0x80), PLACEHOLDER);
        assert_eq!(charset.to_latin1(0x80), b'a');
        assert_eq!(charset.to_unicode(0x80), 'α');
        assert_eq!(charset.to_unicode(0x94), 'ω');

        for code in 0x95..=0x9F {
            assert_eq!(charset.to_latin1(code), PLACEHOLDER);
            assert_eq!(charset.to_unicode(code), '_');
        }

        assert_eq!(charset.to_ascii(0xE9), PLACEHOLDER);
        assert_eq!(charset.to_latin1(0xE9), 0xE9);
        assert_eq!(charset.to_unicode(0xE9), 'é');
        assert_eq!(charset.to_ascii(0x1F), PLACEHOLDER);
    }

    #[test]
    fn test_entries() {
        for charset in ALL {
            let entries: Vec<CharsetEntry> = charset.entries().collect();
            assert_eq!(entries.len(), 256);
            for (i, entry) in entries.iter().enumerate() {
                assert_eq!(usize::from(entry.code), i);
                assert!(entry.ascii.is_ascii());
                assert!((entry.unicode as u32) < 0x800);
            }
        }
    }
}
