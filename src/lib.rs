// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - TI graphing calculator variable name library.
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
 * # `tivarname` Crate
 *
 * A library for turning the variable names stored by TI graphing calculators
 * into readable text and into file names.
 *
 * Names go through a short pipeline:
 *
 * 1. [detokenize]: Expands the token-encoded names of the TI-73/82/83/84
 *    family ("5D 00") into display names in the calculator charset ("L1").
 * 2. [transcode]: Maps the calculator charset into ASCII, Latin-1 or UTF-8,
 *    using the tables in [charset].
 * 3. [filename]: Makes a translated name safe to use as a file name.
 *
 * [translate] runs the first two steps with the encoding held by a
 * [Translator], which can be configured from a TOML file with
 * [config::load_config].
 *
 * ## Usage Example
 *
 * ```
 * use tivarname::config::TranscodeConfig;
 * use tivarname::model::CalcModel;
 * use tivarname::transcode::Encoding;
 * use tivarname::translate::Translator;
 * use tivarname::vartype::VarType;
 *
 * fn main() -> tivarname::Result<()> {
 *     let model: CalcModel = "TI89".parse()?;
 *     let translator = Translator::new(TranscodeConfig::new(Encoding::Unicode, false));
 *
 *     // The TI-89 stores alpha as 0x80
 *     let name = translator.translate(model, b"\x80x", VarType::REAL);
 *     println!("Variable: {}", name);
 *     assert_eq!(name.to_string(), "αx");
 *
 *     // Spelled out for locales that cannot store Greek letters
 *     let filename = translator.filename(model, &name);
 *     assert_eq!(filename, b"_alpha_x");
 *
 *     Ok(())
 * }
 * ```
 */

pub mod charset;
pub mod config;
pub mod detokenize;
pub mod error;
pub mod filename;
pub mod model;
pub mod transcode;
pub mod translate;
pub mod vartype;

pub use error::{Error, Result};
pub use translate::Translator;
