// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/vartype.rs - Variable type codes.
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

use std::fmt;

/// The 8-bit type code stored in a variable header.
///
/// A code only has meaning within one model family. The associated constants
/// use the TI-82 numbering, which the token-based models share for the
/// system variables that get fixed display names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VarType(pub u8);

impl VarType {
    pub const REAL: VarType = VarType(0x00);
    pub const LIST: VarType = VarType(0x01);
    pub const MATRIX: VarType = VarType(0x02);
    pub const YVAR: VarType = VarType(0x03);
    pub const PROGRAM: VarType = VarType(0x05);
    pub const PROTECTED_PROGRAM: VarType = VarType(0x06);
    pub const PICTURE: VarType = VarType(0x07);
    pub const GDB: VarType = VarType(0x08);
    /// Window setup, always named "Window".
    pub const WINDOW: VarType = VarType(0x0B);
    /// Saved zoom window, always named "RclWin".
    pub const ZOOM: VarType = VarType(0x0C);
    /// Table setup, always named "TblSet".
    pub const TABLE: VarType = VarType(0x0D);
    pub const LCD: VarType = VarType(0x0E);
    pub const BACKUP: VarType = VarType(0x0F);

    /// The fixed display name of a system variable type, if it has one.
    pub fn fixed_name(self) -> Option<&'static str> {
        match self {
            VarType::WINDOW => Some("Window"),
            VarType::ZOOM => Some("RclWin"),
            VarType::TABLE => Some("TblSet"),
            _ => None,
        }
    }

    /// The TI-82 type mnemonic, or `""` for unknown codes.
    pub fn ti82_name(self) -> &'static str {
        ti82_entry(self).map_or("", |e| e.name)
    }

    /// The TI-82 file extension, or `"82?"` for unknown codes.
    pub fn ti82_extension(self) -> &'static str {
        ti82_entry(self).map_or("82?", |e| e.extension)
    }

    /// A human-readable description of the TI-82 type.
    pub fn ti82_description(self) -> &'static str {
        ti82_entry(self).map_or("Unknown", |e| e.description)
    }

    /// Looks up a TI-82 type by its mnemonic ("LIST", "PIC", ...).
    pub fn from_ti82_name(name: &str) -> Option<VarType> {
        TI82_TYPES
            .iter()
            .find(|e| !e.name.is_empty() && e.name == name)
            .map(|e| e.vartype)
    }

    /// Looks up a TI-82 type by its file extension, ignoring case.
    ///
    /// Both programs types share "82p"; the unprotected one is returned.
    pub fn from_ti82_extension(extension: &str) -> Option<VarType> {
        TI82_TYPES
            .iter()
            .find(|e| e.extension.eq_ignore_ascii_case(extension))
            .map(|e| e.vartype)
    }
}

impl From<u8> for VarType {
    fn from(code: u8) -> Self {
        VarType(code)
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

struct TypeEntry {
    vartype: VarType,
    name: &'static str,
    extension: &'static str,
    description: &'static str,
}

const TI82_TYPES: [TypeEntry; 13] = [
    TypeEntry { vartype: VarType::REAL, name: "REAL", extension: "82n", description: "Real" },
    TypeEntry { vartype: VarType::LIST, name: "LIST", extension: "82l", description: "List" },
    TypeEntry { vartype: VarType::MATRIX, name: "MAT", extension: "82m", description: "Matrix" },
    TypeEntry { vartype: VarType::YVAR, name: "YVAR", extension: "82y", description: "Y-Var" },
    TypeEntry { vartype: VarType::PROGRAM, name: "PRGM", extension: "82p", description: "Program" },
    TypeEntry {
        vartype: VarType::PROTECTED_PROGRAM,
        name: "PPGM",
        extension: "82p",
        description: "Protected Program",
    },
    TypeEntry { vartype: VarType::PICTURE, name: "PIC", extension: "82i", description: "Picture" },
    TypeEntry { vartype: VarType::GDB, name: "GDB", extension: "82d", description: "GDB" },
    TypeEntry { vartype: VarType::WINDOW, name: "WDW", extension: "82w", description: "Window Setup" },
    TypeEntry { vartype: VarType::ZOOM, name: "ZSTO", extension: "82z", description: "Zoom" },
    TypeEntry { vartype: VarType::TABLE, name: "TAB", extension: "82t", description: "Table Setup" },
    // No file format exists for screen captures.
    TypeEntry { vartype: VarType::LCD, name: "LCD", extension: "82?", description: "LCD" },
    TypeEntry { vartype: VarType::BACKUP, name: "BKUP", extension: "82b", description: "Backup" },
];

fn ti82_entry(vartype: VarType) -> Option<&'static TypeEntry> {
    TI82_TYPES.iter().find(|e| e.vartype == vartype)
}
