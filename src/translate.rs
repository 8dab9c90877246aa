// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/translate.rs - Raw variable name to display name translation.
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
 * # `translate` Module
 *
 * Detokenizes and transcodes in one step. A [Translator] holds the target
 * encoding, so a program that only ever wants, say, UTF-8 names configures it
 * once and passes it around instead of repeating the encoding on every call.
 *
 * ```
 * use tivarname::config::TranscodeConfig;
 * use tivarname::model::CalcModel;
 * use tivarname::transcode::Encoding;
 * use tivarname::translate::Translator;
 * use tivarname::vartype::VarType;
 *
 * let translator = Translator::new(TranscodeConfig::new(Encoding::Unicode, true));
 * let name = translator.translate(CalcModel::Ti83p, &[0x60, 0x09], VarType::PICTURE);
 * assert_eq!(name.to_string(), "Pic0");
 * ```
 */

use crate::config::TranscodeConfig;
use crate::detokenize::detokenize;
use crate::error::{Error, Result};
use crate::filename::varname_to_filename;
use crate::model::CalcModel;
use crate::transcode::{Encoding, TranscodedName, transcode};
use crate::vartype::VarType;

/// Translates raw variable names using a fixed configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    config: TranscodeConfig,
}

impl Translator {
    pub fn new(config: TranscodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranscodeConfig {
        &self.config
    }

    pub fn encoding(&self) -> Encoding {
        self.config.encoding
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.config.encoding = encoding;
    }

    pub fn set_locale_utf8(&mut self, locale_utf8: bool) {
        self.config.locale_utf8 = locale_utf8;
    }

    /// Translates a raw on-device name into a display name.
    pub fn translate(&self, model: CalcModel, raw: &[u8], vartype: VarType) -> TranscodedName {
        translate(model, raw, vartype, self.config.encoding)
    }

    /// Translates a raw name into `dst`, followed by a NUL terminator.
    ///
    /// Returns the length of the name, not counting the terminator.
    ///
    /// # Errors
    ///
    /// Returns [Error::BufferTooSmall] if `dst` cannot hold the name and its
    /// terminator. `dst` is left untouched in that case.
    pub fn translate_into(
        &self,
        model: CalcModel,
        raw: &[u8],
        vartype: VarType,
        dst: &mut [u8],
    ) -> Result<usize> {
        let name = self.translate(model, raw, vartype).into_bytes();
        let len = name.len();
        if len + 1 > dst.len() {
            return Err(Error::BufferTooSmall {
                needed: len + 1,
                available: dst.len(),
            });
        }

        dst[..len].copy_from_slice(&name);
        dst[len] = 0;
        Ok(len)
    }

    /// Converts a name returned by [Translator::translate] into a filename.
    pub fn filename(&self, model: CalcModel, name: &TranscodedName) -> Vec<u8> {
        varname_to_filename(model, name.encoding(), self.config.locale_utf8, name.as_bytes())
    }
}

/// Translates a raw on-device name into a display name in `encoding`.
pub fn translate(
    model: CalcModel,
    raw: &[u8],
    vartype: VarType,
    encoding: Encoding,
) -> TranscodedName {
    log::trace!(
        "translate: model={}, vartype={}, raw=\"{}\"",
        model,
        vartype,
        raw.escape_ascii()
    );
    let detokenized = detokenize(model, vartype, raw);
    transcode(model, encoding, detokenized.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator(encoding: Encoding) -> Translator {
        Translator::new(TranscodeConfig::new(encoding, false))
    }

    #[test]
    fn test_translate() {
        let t = translator(Encoding::Unicode);
        assert_eq!(t.translate(CalcModel::Ti83, &[0x5D, 0x00], VarType::LIST).to_string(), "L1");
        assert_eq!(t.translate(CalcModel::Ti83, &[0x5C, 0x01], VarType::MATRIX).to_string(), "[B]");
        assert_eq!(t.translate(CalcModel::Ti82, b"\x00", VarType::WINDOW).to_string(), "Window");
        assert_eq!(t.translate(CalcModel::Ti92p, b"main\\x", VarType(0x00)).to_string(), "main\\x");
        assert_eq!(t.translate(CalcModel::Ti89, b"\x80b", VarType(0x00)).to_string(), "αb");
    }

    #[test]
    fn test_matrix_in_every_encoding() {
        for encoding in [Encoding::Ascii, Encoding::Latin1, Encoding::Unicode] {
            let t = translator(encoding);
            for model in [CalcModel::Ti82, CalcModel::Ti83, CalcModel::Ti84p] {
                let name = t.translate(model, &[0x5C, 0x00], VarType::MATRIX);
                assert_eq!(name.as_bytes(), b"[A]", "{model} {encoding}");
            }
        }
    }

    #[test]
    fn test_sequence_names() {
        let name = translator(Encoding::Ascii).translate(CalcModel::Ti82, &[0x5E, 0x80], VarType::YVAR);
        assert_eq!(name.as_bytes(), b"Un");
        let name = translator(Encoding::Unicode).translate(CalcModel::Ti82, &[0x5E, 0x80], VarType::YVAR);
        assert_eq!(name.to_string(), "Uη");
    }

    #[test]
    fn test_config() {
        let mut t = Translator::new(TranscodeConfig::new(Encoding::Ascii, true));
        t.set_encoding(Encoding::Unicode);
        assert_eq!(t.config(), &TranscodeConfig::new(Encoding::Unicode, true));
    }

    #[test]
    fn test_theta_per_model() {
        let t = translator(Encoding::Unicode);
        assert_eq!(t.translate(CalcModel::Ti83, &[0x63, 0x10], VarType::REAL).to_string(), "θmin");
        assert_eq!(t.translate(CalcModel::Ti85, b"\xc1", VarType::REAL).to_string(), "θ");
    }

    #[test]
    fn test_encoding_is_per_translator() {
        let mut t = translator(Encoding::Ascii);
        assert_eq!(t.encoding(), Encoding::Ascii);
        let ascii = t.translate(CalcModel::Ti83, &[0x8A], VarType::REAL);

        t.set_encoding(Encoding::Latin1);
        let latin1 = t.translate(CalcModel::Ti83, &[0x8A], VarType::REAL);

        // Earlier results are owned values and are unaffected.
        assert_eq!(ascii.as_bytes(), b"_");
        assert_eq!(latin1.as_bytes(), b"\xc1");
        assert_eq!(ascii.encoding(), Encoding::Ascii);
    }

    #[test]
    fn test_translate_into() {
        let t = translator(Encoding::Unicode);

        let mut buf = [0xAAu8; 8];
        let len = t.translate_into(CalcModel::Ti89, b"\x80", VarType::REAL, &mut buf).unwrap();
        assert_eq!(len, 2);
        assert_eq!(&buf[..3], b"\xce\xb1\0");

        let mut small = [0xAAu8; 2];
        let err = t.translate_into(CalcModel::Ti89, b"\x80", VarType::REAL, &mut small).unwrap_err();
        assert!(matches!(err, Error::BufferTooSmall { needed: 3, available: 2 }));
        assert_eq!(small, [0xAA, 0xAA]);
    }

    #[test]
    fn test_unknown_model() {
        let t = translator(Encoding::Latin1);
        assert_eq!(t.translate(CalcModel::None, b"A", VarType::REAL).to_string(), "________");
    }

    #[test]
    fn test_filename() {
        let t = translator(Encoding::Unicode);
        let name = t.translate(CalcModel::Ti89, b"\x80x", VarType::REAL);
        assert_eq!(t.filename(CalcModel::Ti89, &name), b"_alpha_x");

        let mut t = t;
        t.set_locale_utf8(true);
        assert_eq!(t.filename(CalcModel::Ti89, &name), "αx".as_bytes());
    }
}
