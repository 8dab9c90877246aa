// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  translate.rs - Variable name translation demo.
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

use std::path::PathBuf;

use clap::Parser;

use tivarname::config::{TranscodeConfig, load_config};
use tivarname::model::CalcModel;
use tivarname::transcode::Encoding;
use tivarname::translate::Translator;
use tivarname::vartype::VarType;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The calculator model ("TI83+", "TI89", ...).
    model: String,

    /// The raw variable name as hex bytes ("5D00").
    raw: String,

    /// The variable type code, in hex.
    #[arg(short, long, default_value = "00")]
    vartype: String,

    /// Target encoding (ascii, latin1, utf-8). Overrides the config file.
    #[arg(short, long)]
    encoding: Option<String>,

    /// TOML file with a [transcode] table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_hex(s: &str) -> Option<Vec<u8>> {
    let s: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(s.get(i..i + 2)?, 16).ok())
        .collect()
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let model: CalcModel = match args.model.parse() {
        Ok(model) => model,
        Err(error) => {
            eprintln!("Error: {}", error);
            return;
        }
    };

    let Some(raw) = parse_hex(&args.raw) else {
        eprintln!("Error: raw name {:?} is not a hex string", &args.raw);
        return;
    };

    let vartype = match u8::from_str_radix(args.vartype.trim_start_matches("0x"), 16) {
        Ok(code) => VarType(code),
        Err(error) => {
            eprintln!("Error parsing vartype {:?}: {}", &args.vartype, error);
            return;
        }
    };

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error loading config {:?}: {}", path, error);
                return;
            }
        },
        None => TranscodeConfig::default(),
    };

    let mut translator = Translator::new(config);
    if let Some(encoding) = &args.encoding {
        match encoding.parse::<Encoding>() {
            Ok(encoding) => translator.set_encoding(encoding),
            Err(error) => {
                eprintln!("Error: {}", error);
                return;
            }
        }
    }

    let name = translator.translate(model, &raw, vartype);
    let filename = translator.filename(model, &name);

    println!("Model:    {}", model);
    println!("Type:     {} ({})", vartype, vartype.ti82_description());
    println!("Encoding: {}", name.encoding());
    println!("Name:     {}", name);
    println!("Bytes:    {}", name.as_bytes().escape_ascii());
    println!("Filename: {}", filename.escape_ascii());
}
