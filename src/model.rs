// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/model.rs - Calculator models and model families.
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
 * # `model` Module
 *
 * Identifies the calculator a variable came from. Every other stage of the
 * pipeline dispatches on [CalcModel]: the detokenizer on whether the model
 * token-encodes its names, the transcoder on which [Charset] the model uses,
 * and the filename legalizer on the [ModelFamily].
 *
 * ```
 * use tivarname::model::{CalcModel, ModelFamily};
 *
 * let model: CalcModel = "TI83+".parse().unwrap();
 * assert_eq!(model, CalcModel::Ti83p);
 * assert_eq!(model.family(), Some(ModelFamily::Ti8x));
 * assert!(model.is_tokenized());
 * ```
 */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::charset::Charset;
use crate::error::Error;

/// The two groups of calculators that share name-encoding rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    /// Z80-based models (TI-73 to TI-86).
    Ti8x,
    /// 68k-based models (TI-89, TI-92 and derivatives).
    Ti9x,
}

/// A calculator model.
///
/// `None` stands for "no model" and is what unrecognized input collapses to;
/// the translation pipeline still produces a placeholder name for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalcModel {
    #[default]
    None,
    Ti73,
    Ti82,
    Ti83,
    Ti83p,
    Ti84p,
    Ti85,
    Ti86,
    Ti89,
    Ti89t,
    Ti92,
    Ti92p,
    V200,
    Ti84pUsb,
    Ti89tUsb,
}

impl CalcModel {
    /// Every model with a known charset.
    pub const ALL: [CalcModel; 14] = [
        CalcModel::Ti73,
        CalcModel::Ti82,
        CalcModel::Ti83,
        CalcModel::Ti83p,
        CalcModel::Ti84p,
        CalcModel::Ti85,
        CalcModel::Ti86,
        CalcModel::Ti89,
        CalcModel::Ti89t,
        CalcModel::Ti92,
        CalcModel::Ti92p,
        CalcModel::V200,
        CalcModel::Ti84pUsb,
        CalcModel::Ti89tUsb,
    ];

    /// The numeric code of the model.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The family this model belongs to, or `None` for [CalcModel::None].
    pub fn family(self) -> Option<ModelFamily> {
        match self {
            CalcModel::Ti73
            | CalcModel::Ti82
            | CalcModel::Ti83
            | CalcModel::Ti83p
            | CalcModel::Ti84p
            | CalcModel::Ti84pUsb
            | CalcModel::Ti85
            | CalcModel::Ti86 => Some(ModelFamily::Ti8x),
            CalcModel::Ti89
            | CalcModel::Ti89t
            | CalcModel::Ti89tUsb
            | CalcModel::Ti92
            | CalcModel::Ti92p
            | CalcModel::V200 => Some(ModelFamily::Ti9x),
            CalcModel::None => None,
        }
    }

    pub fn is_ti8x(self) -> bool {
        self.family() == Some(ModelFamily::Ti8x)
    }

    pub fn is_ti9x(self) -> bool {
        self.family() == Some(ModelFamily::Ti9x)
    }

    /// Whether on-device variable names are token encoded.
    ///
    /// The TI-85/86 belong to the 8x family but store plain names.
    pub fn is_tokenized(self) -> bool {
        matches!(
            self,
            CalcModel::Ti73
                | CalcModel::Ti82
                | CalcModel::Ti83
                | CalcModel::Ti83p
                | CalcModel::Ti84p
                | CalcModel::Ti84pUsb
        )
    }

    /// The character set used to display names on this model.
    pub fn charset(self) -> Option<Charset> {
        match self {
            CalcModel::Ti82 => Some(Charset::Ti82),
            CalcModel::Ti73
            | CalcModel::Ti83
            | CalcModel::Ti83p
            | CalcModel::Ti84p
            | CalcModel::Ti84pUsb => Some(Charset::Ti83),
            CalcModel::Ti85 | CalcModel::Ti86 => Some(Charset::Ti85),
            CalcModel::Ti89
            | CalcModel::Ti89t
            | CalcModel::Ti89tUsb
            | CalcModel::Ti92
            | CalcModel::Ti92p
            | CalcModel::V200 => Some(Charset::Ti9x),
            CalcModel::None => None,
        }
    }

    /// The short display name of the model.
    pub fn name(self) -> &'static str {
        match self {
            CalcModel::None => "none",
            CalcModel::Ti73 => "TI73",
            CalcModel::Ti82 => "TI82",
            CalcModel::Ti83 => "TI83",
            CalcModel::Ti83p => "TI83+",
            CalcModel::Ti84p => "TI84+",
            CalcModel::Ti85 => "TI85",
            CalcModel::Ti86 => "TI86",
            CalcModel::Ti89 => "TI89",
            CalcModel::Ti89t => "TI89t",
            CalcModel::Ti92 => "TI92",
            CalcModel::Ti92p => "TI92+",
            CalcModel::V200 => "V200",
            CalcModel::Ti84pUsb => "TI84+ USB",
            CalcModel::Ti89tUsb => "TI89t USB",
        }
    }
}

impl TryFrom<u8> for CalcModel {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CalcModel::None),
            1..=14 => Ok(CalcModel::ALL[usize::from(code) - 1]),
            _ => Err(Error::InvalidModelCode(code)),
        }
    }
}

impl fmt::Display for CalcModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalcModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        let model = match normalized.as_str() {
            "none" => CalcModel::None,
            "ti73" => CalcModel::Ti73,
            "ti82" => CalcModel::Ti82,
            "ti83" => CalcModel::Ti83,
            "ti83+" | "ti83p" => CalcModel::Ti83p,
            "ti84+" | "ti84p" => CalcModel::Ti84p,
            "ti85" => CalcModel::Ti85,
            "ti86" => CalcModel::Ti86,
            "ti89" => CalcModel::Ti89,
            "ti89t" => CalcModel::Ti89t,
            "ti92" => CalcModel::Ti92,
            "ti92+" | "ti92p" => CalcModel::Ti92p,
            "v200" => CalcModel::V200,
            "ti84+usb" | "ti84pusb" => CalcModel::Ti84pUsb,
            "ti89tusb" => CalcModel::Ti89tUsb,
            _ => return Err(Error::UnknownModel(s.to_string())),
        };

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(CalcModel::try_from(0).unwrap(), CalcModel::None);
        assert_eq!(CalcModel::try_from(2).unwrap(), CalcModel::Ti82);
        assert_eq!(CalcModel::try_from(12).unwrap(), CalcModel::V200);
        assert_eq!(CalcModel::try_from(14).unwrap(), CalcModel::Ti89tUsb);
        assert!(matches!(
            CalcModel::try_from(15),
            Err(Error::InvalidModelCode(15))
        ));

        for model in CalcModel::ALL {
            assert_eq!(CalcModel::try_from(model.code()).unwrap(), model);
        }
    }

    #[test]
    fn test_families() {
        assert!(CalcModel::Ti73.is_ti8x());
        assert!(CalcModel::Ti86.is_ti8x());
        assert!(!CalcModel::Ti86.is_tokenized());
        assert!(CalcModel::Ti84pUsb.is_tokenized());
        assert!(CalcModel::V200.is_ti9x());
        assert!(!CalcModel::None.is_ti8x());
        assert!(!CalcModel::None.is_ti9x());
        assert_eq!(CalcModel::None.charset(), None);
    }

    #[test]
    fn test_charset_selection() {
        assert_eq!(CalcModel::Ti82.charset(), Some(Charset::Ti82));
        assert_eq!(CalcModel::Ti73.charset(), Some(Charset::Ti83));
        assert_eq!(CalcModel::Ti84p.charset(), Some(Charset::Ti83));
        assert_eq!(CalcModel::Ti86.charset(), Some(Charset::Ti85));
        assert_eq!(CalcModel::Ti92p.charset(), Some(Charset::Ti9x));
    }

    #[test]
    fn test_names() {
        for model in CalcModel::ALL {
            assert_eq!(model.to_string().parse::<CalcModel>().unwrap(), model);
        }
        assert_eq!("ti-83p".parse::<CalcModel>().unwrap(), CalcModel::Ti83p);
        assert_eq!("TI89t USB".parse::<CalcModel>().unwrap(), CalcModel::Ti89tUsb);
        assert!(matches!(
            "TI-99".parse::<CalcModel>(),
            Err(Error::UnknownModel(_))
        ));
    }
}
