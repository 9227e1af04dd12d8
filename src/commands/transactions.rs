// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::App;
use crate::aggregate::recent;
use crate::forms::{TransactionForm, parse_positive_amount, signed_amount};
use crate::models::{TransactionPatch, TxKind};
use crate::slots::SlotStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};
use anyhow::{Result, anyhow};
use serde::Serialize;

pub fn handle<S: SlotStore>(app: &mut App<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        Some(("edit", sub)) => edit(app, sub)?,
        Some(("rm", sub)) => rm(app, sub)?,
        Some(("clear", sub)) => {
            if !sub.get_flag("yes") {
                app.notices
                    .info("Nothing deleted; pass --yes to delete every transaction");
                return Ok(());
            }
            app.transactions.clear()?;
            app.notices.success("All transactions deleted");
        }
        _ => {}
    }
    Ok(())
}

fn kind_of(sub: &clap::ArgMatches) -> Result<Option<TxKind>> {
    sub.get_one::<String>("type").map(|s| s.parse()).transpose()
}

fn add<S: SlotStore>(app: &mut App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let kind = kind_of(sub)?.ok_or_else(|| anyhow!("--type is required"))?;
    let category = match sub.get_one::<String>("category") {
        Some(c) => c.clone(),
        None => default_category(kind).to_string(),
    };
    let form = TransactionForm {
        description: sub.get_one::<String>("description").cloned().unwrap_or_default(),
        category,
        amount: sub.get_one::<String>("amount").cloned().unwrap_or_default(),
        kind,
    };
    let new = form.validate()?;
    let tx = app.transactions.add(new)?;
    app.notices
        .success(format!("Transaction added: {}", tx.description));
    println!("{}", tx.id);
    Ok(())
}

/// Category preselected by the entry form for each kind.
pub fn default_category(kind: TxKind) -> &'static str {
    match kind {
        TxKind::Income => "Salário",
        TxKind::Expense => "Alimentação",
    }
}

fn edit<S: SlotStore>(app: &mut App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").map(String::as_str).unwrap_or_default();
    let Some(current) = app.transactions.get(id) else {
        app.notices.info(format!("No transaction with id '{}'", id));
        return Ok(());
    };
    let kind = kind_of(sub)?;
    let effective_kind = kind.unwrap_or(current.kind);
    // Re-sign the stored amount when only the type changes.
    let amount = match sub.get_one::<String>("amount") {
        Some(raw) => Some(signed_amount(parse_positive_amount(raw)?, effective_kind)),
        None if kind.is_some() => Some(signed_amount(current.amount, effective_kind)),
        None => None,
    };
    let patch = TransactionPatch {
        description: sub
            .get_one::<String>("description")
            .map(|d| d.trim().to_string()),
        category: sub.get_one::<String>("category").cloned(),
        amount,
        date: sub
            .get_one::<String>("date")
            .map(|d| parse_date(d))
            .transpose()?,
        kind,
    };
    if patch.description.as_deref() == Some("") {
        return Err(crate::errors::ValidationError::EmptyDescription.into());
    }
    if patch.is_empty() {
        app.notices.info("Nothing to change");
        return Ok(());
    }
    app.transactions.update(id, patch)?;
    app.notices.success("Transaction updated");
    Ok(())
}

fn rm<S: SlotStore>(app: &mut App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").map(String::as_str).unwrap_or_default();
    if app.transactions.remove(id)? {
        app.notices.success("Transaction deleted");
    } else {
        app.notices.info(format!("No transaction with id '{}'", id));
    }
    Ok(())
}

fn list<S: SlotStore>(app: &App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(app, sub);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.color.clone(),
                    r.signed.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Category", "Color", "Amount", "ID"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub color: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub signed: String,
}

/// Newest first; `color` is empty when the category no longer exists.
pub fn query_rows<S: SlotStore>(app: &App<S>, sub: &clap::ArgMatches) -> Vec<TransactionRow> {
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    recent(app.transactions.snapshot())
        .into_iter()
        .take(limit)
        .map(|t| {
            let sign = match t.kind {
                TxKind::Income => "+",
                TxKind::Expense => "-",
            };
            TransactionRow {
                id: t.id.clone(),
                date: t.date.to_string(),
                description: t.description.clone(),
                category: t.category.clone(),
                color: app
                    .categories
                    .color_of(&t.category)
                    .unwrap_or_default()
                    .to_string(),
                kind: t.kind,
                signed: format!("{} {}", sign, fmt_money(&t.amount.abs())),
            }
        })
        .collect()
}
