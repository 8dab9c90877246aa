// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  charmap.rs - Dump a calculator charset as CSV.
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

use std::io;

use clap::Parser;

use tivarname::model::CalcModel;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The calculator model whose charset to dump.
    model: String,
}

fn main() {
    let args = Args::parse();

    let model: CalcModel = match args.model.parse() {
        Ok(model) => model,
        Err(error) => {
            eprintln!("Error: {}", error);
            return;
        }
    };

    let Some(charset) = model.charset() else {
        eprintln!("Error: model {} has no charset", model);
        return;
    };

    eprintln!("{} charset for {}", charset.name(), model);

    let mut writer = csv::Writer::from_writer(io::stdout());
    if let Err(error) = writer.write_record(["code", "ascii", "latin1", "unicode", "codepoint"]) {
        eprintln!("Error writing CSV: {}", error);
        return;
    }

    for entry in charset.entries() {
        let record = [
            format!("0x{:02X}", entry.code),
            char::from(entry.ascii).to_string(),
            char::from(entry.latin1).to_string(),
            entry.unicode.to_string(),
            format!("U+{:04X}", u32::from(entry.unicode)),
        ];
        if let Err(error) = writer.write_record(&record) {
            eprintln!("Error writing CSV: {}", error);
            return;
        }
    }

    if let Err(error) = writer.flush() {
        eprintln!("Error writing CSV: {}", error);
    }
}
