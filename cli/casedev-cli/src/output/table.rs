// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Table output formatting

use casedev_model::ApiEnum;
use comfy_table::{Table, presets::NOTHING};

pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(headers);
    table
}

pub fn print_table(table: Table) {
    println!("{table}");
}

/// Wire text of an enum value, known or not
pub fn enum_cell<E>(value: &ApiEnum<E>) -> String
where
    E: Copy + Into<&'static str> + std::str::FromStr,
{
    match value.raw().as_str() {
        Some(s) => s.to_string(),
        None => value.raw().to_string(),
    }
}

/// `-` for missing optional values
pub fn opt_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
