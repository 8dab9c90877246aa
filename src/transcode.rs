// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/transcode.rs - Calculator charset to text encoding conversion.
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
 * # `transcode` Module
 *
 * Converts a detokenized name from the calculator charset into ASCII, Latin-1
 * or UTF-8. The conversion is lossy and never fails: any code without a
 * representation in the target becomes `_`.
 *
 * ```
 * use tivarname::model::CalcModel;
 * use tivarname::transcode::{transcode, Encoding};
 *
 * // "Á" on a TI-83
 * let name = [0x8A];
 * assert_eq!(transcode(CalcModel::Ti83, Encoding::Ascii, &name).as_bytes(), b"_");
 * assert_eq!(transcode(CalcModel::Ti83, Encoding::Latin1, &name).as_bytes(), b"\xc1");
 * assert_eq!(transcode(CalcModel::Ti83, Encoding::Unicode, &name).as_bytes(), "Á".as_bytes());
 * ```
 */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::charset::{Charset, PLACEHOLDER};
use crate::error::Error;
use crate::model::CalcModel;

/// Target text encoding for translated names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Ascii = 1,
    #[default]
    #[serde(alias = "iso-8859-1")]
    Latin1 = 2,
    #[serde(alias = "utf8", alias = "utf-8")]
    Unicode = 3,
}

impl Encoding {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Ascii => "ASCII",
            Encoding::Latin1 => "Latin-1",
            Encoding::Unicode => "UTF-8",
        }
    }

    /// The most bytes one calculator character can take in this encoding.
    pub fn max_bytes_per_char(self) -> usize {
        match self {
            Encoding::Ascii | Encoding::Latin1 => 1,
            Encoding::Unicode => 2,
        }
    }
}

impl TryFrom<u8> for Encoding {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Encoding::Ascii),
            2 => Ok(Encoding::Latin1),
            3 => Ok(Encoding::Unicode),
            _ => Err(Error::InvalidEncoding(code)),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" => Ok(Encoding::Ascii),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Encoding::Latin1),
            "unicode" | "utf8" | "utf-8" => Ok(Encoding::Unicode),
            _ => Err(Error::UnknownEncoding(s.to_string())),
        }
    }
}

/// A name in a target encoding.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TranscodedName {
    bytes: Vec<u8>,
    encoding: Encoding,
}

impl TranscodedName {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for TranscodedName {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for TranscodedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encoding {
            Encoding::Unicode => f.write_str(&String::from_utf8_lossy(&self.bytes)),
            // Latin-1 bytes are the first 256 code points.
            Encoding::Ascii | Encoding::Latin1 => {
                self.bytes.iter().try_for_each(|&b| fmt::Write::write_char(f, char::from(b)))
            }
        }
    }
}

impl fmt::Debug for TranscodedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscodedName")
            .field("encoding", &self.encoding)
            .field("text", &self.to_string())
            .finish()
    }
}

/// Converts a detokenized name into `encoding`.
///
/// Input stops at the first NUL byte. Models without a charset log a warning
/// and produce one `_` per input byte.
pub fn transcode(model: CalcModel, encoding: Encoding, src: &[u8]) -> TranscodedName {
    let src = match src.iter().position(|&b| b == 0) {
        Some(end) => &src[..end],
        None => src,
    };

    let Some(charset) = model.charset() else {
        log::warn!("transcode: invalid calc type {:?}", model);
        return TranscodedName {
            bytes: vec![PLACEHOLDER; src.len()],
            encoding,
        };
    };

    let bytes = match encoding {
        Encoding::Ascii => to_ascii(charset, src),
        Encoding::Latin1 => to_latin1(charset, src),
        Encoding::Unicode => to_utf8(charset, src),
    };

    TranscodedName { bytes, encoding }
}

pub fn to_ascii(charset: Charset, src: &[u8]) -> Vec<u8> {
    src.iter().map(|&code| charset.to_ascii(code)).collect()
}

pub fn to_latin1(charset: Charset, src: &[u8]) -> Vec<u8> {
    src.iter().map(|&code| charset.to_latin1(code)).collect()
}

pub fn to_utf8(charset: Charset, src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() * Encoding::Unicode.max_bytes_per_char());
    let mut buf = [0u8; 4];
    for &code in src {
        let encoded = charset.to_unicode(code).encode_utf8(&mut buf);
        debug_assert!(encoded.len() <= Encoding::Unicode.max_bytes_per_char());
        out.extend_from_slice(encoded.as_bytes());
    }
    out
}
