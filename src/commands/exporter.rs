// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::App;
use crate::export::{ExportFormat, default_file_name, render};
use crate::slots::SlotStore;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

pub fn handle<S: SlotStore>(app: &mut App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt: ExportFormat = sub
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("csv")
        .parse()?;
    let out = match sub.get_one::<String>("out") {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(default_file_name(fmt, Utc::now().date_naive())),
    };

    let bytes = render(fmt, app.transactions.snapshot())?;
    std::fs::write(&out, bytes).with_context(|| format!("Write {}", out.display()))?;
    tracing::debug!(path = %out.display(), "export written");
    app.notices.success("Transactions exported");
    println!("Exported transactions to {}", out.display());
    Ok(())
}
