// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::App;
use crate::aggregate::{
    MonthCalendar, balance_totals, calendar_day_total, category_breakdown, daily_series,
    month_calendar, monthly_series,
};
use crate::slots::SlotStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_month, pretty_table};
use anyhow::{Result, anyhow};
use chrono::{Datelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn handle<S: SlotStore>(app: &App<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(app, sub)?,
        Some(("categories", sub)) => categories(app, sub)?,
        Some(("cashflow", sub)) => cashflow(app, sub)?,
        Some(("calendar", sub)) => calendar(app, sub)?,
        Some(("day", sub)) => day(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary<S: SlotStore>(app: &App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let totals = balance_totals(app.transactions.snapshot());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        let data = vec![
            vec!["Balance".into(), fmt_money(&totals.balance)],
            vec!["Income".into(), fmt_money(&totals.income)],
            vec!["Expenses".into(), fmt_money(&totals.expense)],
        ];
        println!("{}", pretty_table(&["", "Amount"], data));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct BreakdownRow {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub share: Decimal,
    pub color: Option<String>,
}

/// Expense breakdown joined with category colors and percentage shares.
pub fn breakdown_rows<S: SlotStore>(app: &App<S>) -> Vec<BreakdownRow> {
    let snapshot = app.transactions.snapshot();
    let total = balance_totals(snapshot).expense;
    category_breakdown(snapshot)
        .into_iter()
        .map(|c| BreakdownRow {
            share: if total.is_zero() {
                Decimal::ZERO
            } else {
                (c.value * Decimal::ONE_HUNDRED / total)
                    .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            },
            color: app.categories.color_of(&c.name).map(str::to_string),
            name: c.name,
            value: c.value,
        })
        .collect()
}

fn categories<S: SlotStore>(app: &App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let rows = breakdown_rows(app);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.color.clone().unwrap_or_default(),
                    fmt_money(&r.value),
                    format!("{}%", r.share),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Color", "Spent", "Share"], data)
        );
    }
    Ok(())
}

fn cashflow<S: SlotStore>(app: &App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let monthly = sub.get_flag("monthly");
    let series = if monthly {
        monthly_series(app.transactions.snapshot())
    } else {
        daily_series(app.transactions.snapshot())
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
        let data = series
            .iter()
            .map(|p| {
                vec![
                    p.bucket.clone(),
                    fmt_money(&p.income),
                    fmt_money(&p.expense),
                    fmt_money(&(p.income - p.expense)),
                ]
            })
            .collect();
        let first = if monthly { "Month" } else { "Date" };
        println!(
            "{}",
            pretty_table(&[first, "Income", "Expense", "Net"], data)
        );
    }
    Ok(())
}

fn calendar<S: SlotStore>(app: &App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let (year, month) = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => {
            let today = Utc::now().date_naive();
            (today.year(), today.month())
        }
    };
    let cal = month_calendar(app.transactions.snapshot(), year, month)
        .ok_or_else(|| anyhow!("Invalid month {}-{:02}", year, month))?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cal)? {
        println!("{:04}-{:02}", cal.year, cal.month);
        println!("{}", pretty_table(&WEEKDAYS, calendar_grid(&cal)));
    }
    Ok(())
}

/// Week rows of 7 cells; a day cell reads `<day> <+/-total>` when it has
/// activity.
pub fn calendar_grid(cal: &MonthCalendar) -> Vec<Vec<String>> {
    let mut cells: Vec<String> = vec![String::new(); cal.leading_blanks as usize];
    for d in &cal.days {
        cells.push(if d.has_transactions {
            let sign = if d.total.is_sign_negative() { "" } else { "+" };
            format!("{} {}{}", d.day, sign, fmt_money(&d.total))
        } else {
            d.day.to_string()
        });
    }
    while cells.len() % 7 != 0 {
        cells.push(String::new());
    }
    cells.chunks(7).map(|w| w.to_vec()).collect()
}

fn day<S: SlotStore>(app: &App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub
        .get_one::<String>("date")
        .ok_or_else(|| anyhow!("--date is required"))?;
    let date = parse_date(raw)?;
    let total = calendar_day_total(
        app.transactions.snapshot(),
        date.year(),
        date.month(),
        date.day(),
    );
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &total)? {
        println!("{} {}", date, fmt_money(&total));
    }
    Ok(())
}
