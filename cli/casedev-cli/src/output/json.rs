// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! JSON output formatting

use anyhow::Context;
use serde::Serialize;
use std::io::{self, ErrorKind, Write};

/// Print a record to stdout as pretty JSON, keeping wire field order and
/// any fields this CLI does not know about.
///
/// A closed pipe (`casedev projects list --json | head`) ends output quietly.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    match write_json(io::stdout().lock(), value) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write JSON output"),
    }
}

fn write_json<W: Write, T: Serialize>(mut out: W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    out.flush()
}
