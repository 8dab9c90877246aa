// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/error.rs - Error types for TI variable name handling.
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

use thiserror::Error;

/// Errors returned at the edges of the crate.
///
/// Name translation itself never fails; these only come from parsing model or
/// encoding identifiers, from the caller-buffer translation shape, and from
/// configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// A calculator model name that is not recognized.
    #[error("unknown calculator model: {0:?}")]
    UnknownModel(String),

    /// A numeric calculator model code that is out of range.
    #[error("invalid calculator model code: {0}")]
    InvalidModelCode(u8),

    /// An encoding name that is not recognized.
    #[error("unknown encoding: {0:?}")]
    UnknownEncoding(String),

    /// A numeric encoding code that is out of range.
    #[error("invalid encoding code: {0}")]
    InvalidEncoding(u8),

    /// The destination buffer cannot hold the translated name.
    #[error("buffer too small: needed {needed} bytes but only {available} available")]
    BufferTooSmall { needed: usize, available: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
