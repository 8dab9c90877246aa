// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/filename.rs - Variable name to filename conversion.
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
 * # `filename` Module
 *
 * Turns a translated variable name into something that can be used as a file
 * name. TI-89/92 names may contain Greek letters; when names are UTF-8 but the
 * host locale is not, each Greek letter is spelled out between underscores.
 *
 * ```
 * use tivarname::filename::varname_to_filename;
 * use tivarname::model::CalcModel;
 * use tivarname::transcode::Encoding;
 *
 * let name = varname_to_filename(CalcModel::Ti89, Encoding::Unicode, false, "xα".as_bytes());
 * assert_eq!(name, b"x_alpha_");
 * ```
 */

use crate::model::CalcModel;
use crate::transcode::Encoding;

/// Maximum length of a legalized filename, in bytes.
pub const FILENAME_MAX: usize = 63;

/// Length of names copied unchanged.
const PASSTHROUGH_MAX: usize = 17;

/// Substitute for characters with no spelled-out form.
pub const UNKNOWN_MNEMONIC: &str = "unknown";

const GREEK_MNEMONICS: [(char, &str); 22] = [
    ('μ', "mu"),
    ('α', "alpha"),
    ('β', "beta"),
    ('Γ', "GAMMA"),
    ('γ', "gamma"),
    ('Δ', "DELTA"),
    ('δ', "delta"),
    ('ε', "epsilon"),
    ('ζ', "dzeta"),
    ('θ', "theta"),
    ('λ', "lambda"),
    ('ξ', "ksi"),
    ('Π', "PI"),
    ('π', "pi"),
    ('ρ', "rho"),
    ('Σ', "SIGMA"),
    ('σ', "sigma"),
    ('τ', "tau"),
    ('ϕ', "PHI"),
    ('Ψ', "PSI"),
    ('Ω', "OMEGA"),
    ('ω', "omega"),
];

/// The spelled-out name of a Greek letter.
pub fn greek_mnemonic(c: char) -> Option<&'static str> {
    GREEK_MNEMONICS
        .iter()
        .find(|(greek, _)| *greek == c)
        .map(|(_, mnemonic)| *mnemonic)
}

/// Converts a translated variable name into a filename.
///
/// `src` is the output of [crate::transcode::transcode] in `encoding`. Only
/// 9x names in UTF-8 on a non-UTF-8 locale are rewritten: ASCII and Latin-1
/// characters are kept, Greek letters become `_alpha_` and so on, and any
/// other character becomes `_unknown_`. All other names are copied, up to 17
/// bytes without splitting a UTF-8 character. The result never exceeds
/// [FILENAME_MAX] bytes.
pub fn varname_to_filename(
    model: CalcModel,
    encoding: Encoding,
    locale_utf8: bool,
    src: &[u8],
) -> Vec<u8> {
    let src = match src.iter().position(|&b| b == 0) {
        Some(end) => &src[..end],
        None => src,
    };

    if !(model.is_ti9x() && encoding == Encoding::Unicode && !locale_utf8) {
        let mut end = src.len().min(PASSTHROUGH_MAX);
        if encoding == Encoding::Unicode {
            // Never split a UTF-8 sequence.
            while end < src.len() && end > 0 && src[end] & 0xC0 == 0x80 {
                end -= 1;
            }
        }
        return src[..end].to_vec();
    }

    let mut dst = Vec::with_capacity(FILENAME_MAX);
    let mut buf = [0u8; 4];
    for c in String::from_utf8_lossy(src).chars() {
        let piece = if u32::from(c) < 0x100 {
            c.encode_utf8(&mut buf).as_bytes().to_vec()
        } else {
            let mnemonic = greek_mnemonic(c).unwrap_or(UNKNOWN_MNEMONIC);
            format!("_{}_", mnemonic).into_bytes()
        };

        if dst.len() + piece.len() > FILENAME_MAX {
            break;
        }
        dst.extend_from_slice(&piece);
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legalize(src: &str) -> String {
        let dst = varname_to_filename(CalcModel::Ti89, Encoding::Unicode, false, src.as_bytes());
        String::from_utf8(dst).unwrap()
    }

    #[test]
    fn test_greek_substitution() {
        assert_eq!(legalize("α"), "_alpha_");
        assert_eq!(legalize("aαb"), "a_alpha_b");
        assert_eq!(legalize("ΔxΣ"), "_DELTA_x_SIGMA_");
        assert_eq!(legalize("πρστω"), "_pi__rho__sigma__tau__omega_");
        assert_eq!(legalize("μϕ"), "_mu__PHI_");
    }

    #[test]
    fn test_latin1_kept() {
        assert_eq!(legalize("café"), "café");
        assert_eq!(legalize("x\u{a0}ÿ"), "x\u{a0}ÿ");
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(legalize("aη"), "a_unknown_");
        assert_eq!(legalize("€"), "_unknown_");

        let dst = varname_to_filename(CalcModel::V200, Encoding::Unicode, false, b"a\xffb");
        assert_eq!(dst, b"a_unknown_b");
    }

    #[test]
    fn test_passthrough() {
        let src = "main\\α".as_bytes();
        assert_eq!(
            varname_to_filename(CalcModel::Ti89, Encoding::Unicode, true, src),
            src
        );
        assert_eq!(
            varname_to_filename(CalcModel::Ti89, Encoding::Latin1, false, b"x\xe9"),
            b"x\xe9"
        );
        assert_eq!(
            varname_to_filename(CalcModel::Ti83, Encoding::Unicode, false, "θ".as_bytes()),
            "θ".as_bytes()
        );
        assert_eq!(
            varname_to_filename(CalcModel::Ti86, Encoding::Ascii, false, b"abcdefghijklmnopqrstuvwxyz"),
            b"abcdefghijklmnopq"
        );
        assert_eq!(
            varname_to_filename(CalcModel::None, Encoding::Unicode, false, b"ab\0cd"),
            b"ab"
        );
    }

    #[test]
    fn test_passthrough_keeps_whole_characters() {
        // A 6-byte prefix puts byte 17 inside the sixth letter.
        let src = "mainx\\αβγδεζη".as_bytes();
        let dst = varname_to_filename(CalcModel::Ti89, Encoding::Unicode, true, src);
        assert_eq!(String::from_utf8(dst).unwrap(), "mainx\\αβγδε");

        // A 5-byte prefix ends the sixth letter exactly at byte 17.
        let src = "main\\αβγδεζηθ".as_bytes();
        let dst = varname_to_filename(CalcModel::Ti89, Encoding::Unicode, true, src);
        assert_eq!(String::from_utf8(dst).unwrap(), "main\\αβγδεζ");
    }

    #[test]
    fn test_length_limit() {
        let name = legalize(&"ω".repeat(17));
        assert!(name.len() <= FILENAME_MAX);
        assert_eq!(name, "_omega_".repeat(9));
    }

    #[test]
    fn test_mnemonic_table() {
        for (greek, mnemonic) in GREEK_MNEMONICS {
            assert_eq!(greek_mnemonic(greek), Some(mnemonic));
            assert!(u32::from(greek) < 0x800);
        }
        assert_eq!(greek_mnemonic('a'), None);
    }
}
