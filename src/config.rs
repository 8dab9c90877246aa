// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/config.rs - Translation settings and locale detection.
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

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::transcode::Encoding;

/// Settings shared by every translation made through a
/// [Translator](crate::translate::Translator).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeConfig {
    /// Target encoding of translated names.
    pub encoding: Encoding,
    /// Whether the host's filesystem names can hold any UTF-8 text. When
    /// false, Greek letters in 9x names are spelled out in filenames.
    pub locale_utf8: bool,
}

impl Default for TranscodeConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            locale_utf8: locale_is_utf8(),
        }
    }
}

impl TranscodeConfig {
    pub fn new(encoding: Encoding, locale_utf8: bool) -> Self {
        Self {
            encoding,
            locale_utf8,
        }
    }

    /// Parses a TOML document, overriding the defaults with whatever keys
    /// its `[transcode]` table sets.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;

        let mut config = Self::default();
        if let Some(section) = file.transcode {
            if let Some(v) = section.encoding {
                config.encoding = v;
            }
            if let Some(v) = section.locale_utf8 {
                config.locale_utf8 = v;
            }
        }

        Ok(config)
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    transcode: Option<TranscodeSection>,
}

/// All fields optional for partial override.
#[derive(Deserialize)]
struct TranscodeSection {
    encoding: Option<Encoding>,
    locale_utf8: Option<bool>,
}

/// Loads a [TranscodeConfig] from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use tivarname::config::load_config;
///
/// let config = load_config(Path::new("tivarname.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<TranscodeConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = TranscodeConfig::from_toml_str(&content)?;
    log::debug!("Loaded {:?} from {}", config, path.display());
    Ok(config)
}

/// Whether a locale name such as "en_US.UTF-8" uses the UTF-8 codeset.
///
/// A name without a '.' is taken to be a bare codeset.
pub fn codeset_is_utf8(locale: &str) -> bool {
    let codeset = locale.split_once('.').map_or(locale, |(_, c)| c);
    let codeset = codeset.split_once('@').map_or(codeset, |(c, _)| c);
    let normalized: String = codeset
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_ascii_lowercase();
    normalized == "utf8"
}

/// Whether the process locale can represent any UTF-8 text.
///
/// Checks `LC_ALL`, `LC_CTYPE` and `LANG` in that order; the first one that is
/// set and non-empty decides.
#[cfg(not(windows))]
pub fn locale_is_utf8() -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()));

    let utf8 = locale.as_deref().is_some_and(codeset_is_utf8);
    log::debug!("Locale {:?}, UTF-8: {}", locale, utf8);
    utf8
}

/// Windows filenames are UTF-16, but the legacy code pages used for byte
/// strings are not UTF-8.
#[cfg(windows)]
pub fn locale_is_utf8() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_codeset_is_utf8() {
        assert!(codeset_is_utf8("en_US.UTF-8"));
        assert!(codeset_is_utf8("de_DE.utf8"));
        assert!(codeset_is_utf8("C.UTF-8"));
        assert!(codeset_is_utf8("sr_RS.UTF-8@latin"));
        assert!(codeset_is_utf8("UTF-8"));
        assert!(!codeset_is_utf8("C"));
        assert!(!codeset_is_utf8("POSIX"));
        assert!(!codeset_is_utf8("fr_FR.ISO-8859-1"));
        assert!(!codeset_is_utf8("fr_FR@euro"));
        assert!(!codeset_is_utf8(""));
    }

    #[test]
    fn test_from_toml_str() {
        let config = TranscodeConfig::from_toml_str(
            "[transcode]\nencoding = \"unicode\"\nlocale_utf8 = false\n",
        )
        .unwrap();
        assert_eq!(config, TranscodeConfig::new(Encoding::Unicode, false));
    }

    #[test]
    fn test_partial_override() {
        let defaults = TranscodeConfig::default();

        let config = TranscodeConfig::from_toml_str("[transcode]\nencoding = \"utf-8\"\n").unwrap();
        assert_eq!(config.encoding, Encoding::Unicode);
        assert_eq!(config.locale_utf8, defaults.locale_utf8);

        let config = TranscodeConfig::from_toml_str("").unwrap();
        assert_eq!(config, defaults);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(TranscodeConfig::from_toml_str("[transcode]\nencoding = \"ebcdic\"\n").is_err());
        assert!(TranscodeConfig::from_toml_str("[transcode\n").is_err());
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tivarname.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[transcode]").unwrap();
        writeln!(file, "encoding = \"ascii\"").unwrap();
        writeln!(file, "locale_utf8 = true").unwrap();
        drop(file);

        let config = load_config(&path).unwrap();
        assert_eq!(config, TranscodeConfig::new(Encoding::Ascii, true));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = TranscodeConfig::new(Encoding::Latin1, true);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<TranscodeConfig>(&text).unwrap(), config);
    }
}
