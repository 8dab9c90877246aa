// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/detokenize.rs - Variable name detokenization.
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
 * # `detokenize` Module
 *
 * The TI-73/82/83/83+/84+ do not store the names of their built-in variables
 * as text. A list is stored as the token pair `5D 00` rather than "L1", a
 * picture as `60 02` rather than "Pic3", and so on. This module expands those
 * token pairs into the canonical display name, still in the calculator's own
 * charset (digits in names are the subscript digits at 0x80..0x89).
 *
 * All other models store plain names, which are copied as-is.
 *
 * ## Usage Example
 *
 * ```
 * use tivarname::detokenize::detokenize;
 * use tivarname::model::CalcModel;
 * use tivarname::vartype::VarType;
 *
 * let name = detokenize(CalcModel::Ti83, VarType::LIST, &[0x5D, 0x00]);
 * assert_eq!(name.as_bytes(), b"L\x81");
 *
 * let name = detokenize(CalcModel::Ti83, VarType::WINDOW, &[0x00; 8]);
 * assert_eq!(name.as_bytes(), b"Window");
 * ```
 */

use std::fmt;

use crate::model::CalcModel;
use crate::vartype::VarType;

/// Maximum number of bytes in a raw token-encoded name.
pub const RAW_NAME_MAX: usize = 8;

/// Maximum number of bytes in a detokenized name.
pub const DETOKENIZED_MAX: usize = 17;

/// Name produced for models without a charset.
pub const UNKNOWN_MODEL_NAME: &[u8] = b"________";

const TOKEN_MATRIX: u8 = 0x5C;
const TOKEN_LIST: u8 = 0x5D;
const TOKEN_EQUATION: u8 = 0x5E;
const TOKEN_PICTURE: u8 = 0x60;
const TOKEN_GDB: u8 = 0x61;
const TOKEN_STATISTICS: u8 = 0x62;
const TOKEN_WINDOW: u8 = 0x63;
const TOKEN_STRING: u8 = 0xAA;

// Subscript zero; the other digits follow it.
const DIGIT_ZERO: u8 = 0x80;
// Opening bracket of matrix names.
const MATRIX_OPEN: u8 = 0xC1;
// Subscript n of the TI-82 sequence variables.
const TI82_SUBSCRIPT_N: u8 = 0xD7;

/// Statistics and regression results, indexed by the second token byte.
const STATISTICS_NAMES: [&[u8]; 0x3D] = [
    b"_", b"RegEQ", b"n", b"\xcb", b"\xc6x", b"\xc6x\x12", b"Sx", b"\xc7x",
    b"minX", b"maxX", b"minY", b"maxY", b"\xcc", b"\xc6y", b"\xc6y\x12", b"Sy",
    b"\xc7y", b"\xc6xy", b"r", b"Med", b"Q\x81", b"Q\x83", b"a", b"b",
    b"c", b"d", b"e", b"x\x81", b"x\x82", b"x\x83", b"y\x81", b"y\x82",
    b"y\x83", b"\xd7", b"p", b"z", b"t", b"\xd9\x12", b"\xda", b"df",
    b"\xbc", b"\xbc\x81", b"\xbc\x82", b"\xcb\x81", b"Sx\x81", b"n\x81", b"\xcb\x82", b"Sx\x82",
    b"n\x82", b"Sxp", b"lower", b"upper", b"s", b"r\x12", b"R\x12", b"df",
    b"SS", b"MS", b"df", b"SS", b"MS",
];

/// Window, zoom, table and finance settings, indexed by the second token byte.
const WINDOW_NAMES: [&[u8]; 0x32] = [
    b"ZXscl", b"ZYscl", b"Xscl", b"Yscl", b"U\xd7Start", b"V\xd7Start", b"U\xd7-\x81", b"V\xd7-\x81",
    b"ZU\xd7Start", b"ZV\xd7Start", b"Xmin", b"Xmax", b"Ymin", b"Ymax", b"Tmin", b"Tmax",
    b"\x5bmin", b"\x5bmax", b"ZXmin", b"ZXmax", b"ZYmin", b"ZYmax", b"Z\x5bmin", b"Z\x5bmax",
    b"ZTmin", b"ZTmax", b"TblMin", b"\xd7Min", b"Z\xd7Min", b"\xd7Max", b"Z\xd7Max", b"\xd7Start",
    b"Z\xd7Start", b"\xbeTbl", b"Tstep", b"\x5bstep", b"ZTstep", b"Z\x5bstep", b"\xbeX", b"\xbeY",
    b"XFact", b"YFact", b"TblInput", b"N", b"I%", b"PV", b"PMT", b"FV",
    b"Xres", b"ZXres",
];

/// A variable name in calculator charset, bounded to [DETOKENIZED_MAX] bytes.
///
/// Bytes past the capacity are dropped, and a NUL byte ends the name.
#[derive(Clone, Copy)]
pub struct DetokenizedName {
    buf: [u8; DETOKENIZED_MAX],
    len: usize,
    terminated: bool,
}

impl DetokenizedName {
    pub fn new() -> Self {
        Self {
            buf: [0; DETOKENIZED_MAX],
            len: 0,
            terminated: false,
        }
    }

    /// Builds a name from a C-style string, stopping at the first NUL.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut name = Self::new();
        name.extend(bytes);
        name
    }

    pub fn push(&mut self, byte: u8) {
        if byte == 0 {
            self.terminated = true;
        }
        if self.terminated || self.len == DETOKENIZED_MAX {
            return;
        }
        self.buf[self.len] = byte;
        self.len += 1;
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push(byte);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for DetokenizedName {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DetokenizedName {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for DetokenizedName {}

impl std::hash::Hash for DetokenizedName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl AsRef<[u8]> for DetokenizedName {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for DetokenizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DetokenizedName(\"{}\")", self.as_bytes().escape_ascii())
    }
}

/// Returns the bytes of `bytes` up to the first NUL, at most `max` of them.
fn c_str(bytes: &[u8], max: usize) -> &[u8] {
    let bytes = &bytes[..bytes.len().min(max)];
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// The subscript digit for `n` (0 to 9).
fn digit(n: u8) -> u8 {
    DIGIT_ZERO + n
}

/// Suffix digit of numbered variables that count 1..9 then 0.
fn one_based_digit(index: u8) -> u8 {
    if index == 9 {
        DIGIT_ZERO
    } else {
        index.wrapping_add(DIGIT_ZERO + 1)
    }
}

/// Expands a raw on-device variable name into its display name.
///
/// The result is in the calculator's charset; pass it to
/// [crate::transcode::transcode] to get text. This never fails: models without
/// a charset produce [UNKNOWN_MODEL_NAME].
///
/// # Arguments
///
/// * `model` - The calculator the variable comes from.
/// * `vartype` - The variable type code from the variable header.
/// * `raw` - The name bytes from the variable header.
pub fn detokenize(model: CalcModel, vartype: VarType, raw: &[u8]) -> DetokenizedName {
    if model.is_tokenized() {
        detokenize_ti8x(model, vartype, raw)
    } else if model.family().is_some() {
        DetokenizedName::from_bytes(c_str(raw, DETOKENIZED_MAX))
    } else {
        log::warn!("detokenize: invalid calc type {:?}", model);
        DetokenizedName::from_bytes(UNKNOWN_MODEL_NAME)
    }
}

fn detokenize_ti8x(model: CalcModel, vartype: VarType, raw: &[u8]) -> DetokenizedName {
    if let Some(fixed) = vartype.fixed_name() {
        return DetokenizedName::from_bytes(fixed.as_bytes());
    }

    let tok1 = raw.first().copied().unwrap_or(0);
    let tok2 = raw.get(1).copied().unwrap_or(0);

    let mut name = DetokenizedName::new();
    match tok1 {
        TOKEN_MATRIX => {
            name.push(MATRIX_OPEN);
            name.push(if tok2 <= 9 { b'A' + tok2 } else { b'?' });
            name.push(b']');
        }
        TOKEN_LIST => match tok2 {
            0..=9 => {
                name.push(b'L');
                // The TI-73 numbers its lists from L0, the others from L1.
                name.push(if model == CalcModel::Ti73 {
                    digit(tok2)
                } else {
                    one_based_digit(tok2)
                });
            }
            _ => name.extend(c_str(raw.get(1..).unwrap_or_default(), RAW_NAME_MAX - 1)),
        },
        TOKEN_EQUATION => push_equation(&mut name, model, tok2),
        TOKEN_PICTURE => {
            name.extend(b"Pic");
            name.push(one_based_digit(tok2));
        }
        TOKEN_GDB => {
            name.extend(b"GDB");
            name.push(one_based_digit(tok2));
        }
        TOKEN_STRING => {
            name.extend(b"Str");
            name.push(one_based_digit(tok2));
        }
        TOKEN_STATISTICS => name.extend(table_name(&STATISTICS_NAMES, tok2)),
        TOKEN_WINDOW => name.extend(table_name(&WINDOW_NAMES, tok2)),
        _ => name.extend(c_str(raw, RAW_NAME_MAX)),
    }

    name
}

fn table_name(table: &[&'static [u8]], tok2: u8) -> &'static [u8] {
    table.get(usize::from(tok2)).copied().unwrap_or(b"_")
}

fn push_equation(name: &mut DetokenizedName, model: CalcModel, tok2: u8) {
    match tok2 {
        // Y1..Y9, Y0
        0x10..=0x19 => {
            name.push(b'Y');
            name.push(one_based_digit(tok2 - 0x10));
        }
        // X1t, Y1t .. X6t, Y6t
        0x20..=0x2B => {
            name.push(if tok2 & 1 == 0 { b'X' } else { b'Y' });
            name.push(digit((tok2 - 0x20) / 2 + 1));
            name.push(b't');
        }
        // r1..r6
        0x40..=0x45 => {
            name.push(b'r');
            name.push(digit(tok2 - 0x40 + 1));
        }
        // Sequence functions
        0x80..=0x82 => {
            if model == CalcModel::Ti82 {
                name.push(b'U' + (tok2 - 0x80));
                name.push(TI82_SUBSCRIPT_N);
            } else {
                name.push(b'u' + (tok2 - 0x80));
            }
        }
        _ => name.push(b'_'),
    }
}

/// Encodes a display name back into its raw on-device form.
///
/// This is the inverse of [detokenize] for the token classes whose display
/// names cannot collide with a user variable: matrices, numbered lists,
/// equations, pictures, GDBs and strings. A name of list type that is not a
/// numbered list becomes a named list. Anything else, including the
/// statistics and window settings, is copied as-is.
pub fn tokenize(model: CalcModel, vartype: VarType, name: &[u8]) -> Vec<u8> {
    if model.is_tokenized() {
        tokenize_ti8x(model, vartype, c_str(name, DETOKENIZED_MAX))
    } else if model.family().is_some() {
        c_str(name, DETOKENIZED_MAX).to_vec()
    } else {
        log::warn!("tokenize: invalid calc type {:?}", model);
        UNKNOWN_MODEL_NAME.to_vec()
    }
}

fn tokenize_ti8x(model: CalcModel, vartype: VarType, name: &[u8]) -> Vec<u8> {
    if let Some(raw) = token_pair(model, name) {
        return raw.to_vec();
    }

    if vartype == VarType::LIST {
        let mut raw = vec![TOKEN_LIST];
        raw.extend_from_slice(c_str(name, RAW_NAME_MAX - 1));
        return raw;
    }

    c_str(name, RAW_NAME_MAX).to_vec()
}

/// Inverse of [one_based_digit].
fn one_based_index(digit: u8) -> Option<u8> {
    match digit {
        DIGIT_ZERO => Some(9),
        0x81..=0x89 => Some(digit - 0x81),
        _ => None,
    }
}

fn token_pair(model: CalcModel, name: &[u8]) -> Option<[u8; 2]> {
    let pair = match name {
        [MATRIX_OPEN, letter @ b'A'..=b'J', b']'] => [TOKEN_MATRIX, letter - b'A'],
        [b'L', d] if model == CalcModel::Ti73 && (DIGIT_ZERO..=0x89).contains(d) => {
            [TOKEN_LIST, d - DIGIT_ZERO]
        }
        [b'L', d] if model != CalcModel::Ti73 => [TOKEN_LIST, one_based_index(*d)?],
        [b'Y', d] => [TOKEN_EQUATION, 0x10 + one_based_index(*d)?],
        [axis @ (b'X' | b'Y'), d @ 0x81..=0x86, b't'] => {
            let pair = (d - 0x81) * 2;
            [TOKEN_EQUATION, 0x20 + pair + u8::from(*axis == b'Y')]
        }
        [b'r', d @ 0x81..=0x86] => [TOKEN_EQUATION, 0x40 + (d - 0x81)],
        [f @ b'U'..=b'W', TI82_SUBSCRIPT_N] if model == CalcModel::Ti82 => {
            [TOKEN_EQUATION, 0x80 + (f - b'U')]
        }
        [f @ b'u'..=b'w'] if model != CalcModel::Ti82 => [TOKEN_EQUATION, 0x80 + (f - b'u')],
        [b'P', b'i', b'c', d] => [TOKEN_PICTURE, one_based_index(*d)?],
        [b'G', b'D', b'B', d] => [TOKEN_GDB, one_based_index(*d)?],
        [b'S', b't', b'r', d] => [TOKEN_STRING, one_based_index(*d)?],
        _ => return None,
    };

    Some(pair)
}
