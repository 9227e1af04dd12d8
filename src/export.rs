// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;

use crate::models::Transaction;
use crate::utils::fmt_money;

pub const CSV_HEADER: [&str; 5] = ["Data", "Descrição", "Categoria", "Tipo", "Valor"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(anyhow!("Unknown format: {} (use csv|json)", other)),
        }
    }
}

/// `transacoes_<date>.<ext>`
pub fn default_file_name(format: ExportFormat, today: NaiveDate) -> String {
    format!("transacoes_{}.{}", today.format("%Y-%m-%d"), format.extension())
}

/// Every field quoted, rows in collection order, amounts to two decimals.
pub fn write_csv<W: Write>(out: W, txs: &[Transaction]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for t in txs {
        wtr.write_record([
            t.date.format("%Y-%m-%d").to_string(),
            t.description.clone(),
            t.category.clone(),
            t.kind.export_label().to_string(),
            fmt_money(&t.amount),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut out: W, txs: &[Transaction]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, txs)?;
    out.flush()?;
    Ok(())
}

pub fn render(format: ExportFormat, txs: &[Transaction]) -> Result<Vec<u8>> {
    if txs.is_empty() {
        bail!("No transactions to export");
    }
    let mut buf = Vec::new();
    match format {
        ExportFormat::Csv => write_csv(&mut buf, txs)?,
        ExportFormat::Json => write_json(&mut buf, txs)?,
    }
    Ok(buf)
}
