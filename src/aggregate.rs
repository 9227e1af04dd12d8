// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over a transaction snapshot.
//!
//! Everything here is a pure function of its input slice: no storage, no
//! clock. Callers pass the current snapshot and get fresh totals back.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TxKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

/// Income and expense (as a positive magnitude) for one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub bucket: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub day: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub has_transactions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1, Sunday-first week.
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

pub fn balance_totals(txs: &[Transaction]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in txs {
        match t.kind {
            TxKind::Income => income += t.amount,
            TxKind::Expense => expense += t.amount.abs(),
        }
    }
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Expense totals per category name, in order of first appearance.
pub fn category_breakdown(txs: &[Transaction]) -> Vec<CategoryTotal> {
    let mut out: Vec<CategoryTotal> = Vec::new();
    for t in txs.iter().filter(|t| t.kind == TxKind::Expense) {
        match out.iter_mut().find(|c| c.name == t.category) {
            Some(c) => c.value += t.amount.abs(),
            None => out.push(CategoryTotal {
                name: t.category.clone(),
                value: t.amount.abs(),
            }),
        }
    }
    out
}

/// One point per distinct date, ascending.
pub fn daily_series(txs: &[Transaction]) -> Vec<SeriesPoint> {
    bucketed(txs, |d| day_key(d.year(), d.month(), d.day()))
}

/// One point per `YYYY-MM`, ascending.
pub fn monthly_series(txs: &[Transaction]) -> Vec<SeriesPoint> {
    bucketed(txs, |d| format!("{:04}-{:02}", d.year(), d.month()))
}

fn bucketed(txs: &[Transaction], key: impl Fn(NaiveDate) -> String) -> Vec<SeriesPoint> {
    let mut map: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for t in txs {
        let entry = map
            .entry(key(t.date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.kind {
            TxKind::Income => entry.0 += t.amount,
            TxKind::Expense => entry.1 += t.amount.abs(),
        }
    }
    map.into_iter()
        .map(|(bucket, (income, expense))| SeriesPoint {
            bucket,
            income,
            expense,
        })
        .collect()
}

/// Zero-padded `YYYY-MM-DD`; built from raw parts so impossible dates
/// produce a key nothing matches.
pub fn day_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Net movement on one day: income counts up, expense counts down.
pub fn calendar_day_total(txs: &[Transaction], year: i32, month: u32, day: u32) -> Decimal {
    let key = day_key(year, month, day);
    day_matches(txs, &key).map(net_amount).sum()
}

fn day_matches<'a>(txs: &'a [Transaction], key: &'a str) -> impl Iterator<Item = &'a Transaction> {
    txs.iter()
        .filter(move |t| t.date.format("%Y-%m-%d").to_string() == key)
}

fn net_amount(t: &Transaction) -> Decimal {
    match t.kind {
        TxKind::Income => t.amount.abs(),
        TxKind::Expense => -t.amount.abs(),
    }
}

/// Grid data for a month view; `None` for a month outside 1..=12.
pub fn month_calendar(txs: &[Transaction], year: i32, month: u32) -> Option<MonthCalendar> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let days_in_month = next.signed_duration_since(first).num_days() as u32;

    let days = (1..=days_in_month)
        .map(|day| {
            let key = day_key(year, month, day);
            let mut total = Decimal::ZERO;
            let mut has_transactions = false;
            for t in day_matches(txs, &key) {
                total += net_amount(t);
                has_transactions = true;
            }
            CalendarDay {
                day,
                total,
                has_transactions,
            }
        })
        .collect();

    Some(MonthCalendar {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    })
}

/// Newest first; equal dates keep snapshot order.
pub fn recent(txs: &[Transaction]) -> Vec<&Transaction> {
    let mut out: Vec<&Transaction> = txs.iter().collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_transactions;

    fn tx(id: &str, cat: &str, amount: i64, date: &str, kind: TxKind) -> Transaction {
        Transaction {
            id: id.into(),
            description: id.into(),
            category: cat.into(),
            amount: Decimal::from(amount),
            date: date.parse().unwrap(),
            kind,
        }
    }

    fn example() -> Vec<Transaction> {
        vec![
            tx("a", "Receita", 5000, "2025-01-05", TxKind::Income),
            tx("b", "Alimentação", -450, "2025-01-04", TxKind::Expense),
            tx("c", "Entretenimento", -50, "2025-01-03", TxKind::Expense),
        ]
    }

    #[test]
    fn totals_for_example() {
        let t = balance_totals(&example());
        assert_eq!(t.income, Decimal::from(5000));
        assert_eq!(t.expense, Decimal::from(500));
        assert_eq!(t.balance, Decimal::from(4500));
    }

    #[test]
    fn totals_and_series_serialize_as_numbers() {
        let v = serde_json::to_value(balance_totals(&example())).unwrap();
        assert_eq!(v["income"].as_f64(), Some(5000.0));
        assert_eq!(v["balance"].as_f64(), Some(4500.0));
        let series = serde_json::to_value(daily_series(&example())).unwrap();
        assert_eq!(series[0]["expense"].as_f64(), Some(50.0));
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        assert_eq!(balance_totals(&[]), Totals::default());
        assert!(category_breakdown(&[]).is_empty());
        assert!(daily_series(&[]).is_empty());
        assert!(monthly_series(&[]).is_empty());
        assert_eq!(calendar_day_total(&[], 2025, 1, 4), Decimal::ZERO);
    }

    #[test]
    fn breakdown_keeps_first_seen_order_and_sums_to_expense() {
        let mut txs = seed_transactions();
        txs.push(tx("x", "Alimentação", -25, "2025-01-06", TxKind::Expense));
        let b = category_breakdown(&txs);
        let names: Vec<&str> = b.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Alimentação", "Entretenimento", "Habitação", "Saúde"]
        );
        assert_eq!(b[0].value, Decimal::from(475));
        assert!(!names.contains(&"Receita"));
        let sum: Decimal = b.iter().map(|c| c.value).sum();
        assert_eq!(sum, balance_totals(&txs).expense);
    }

    #[test]
    fn daily_series_sorted_regardless_of_input_order() {
        let mut txs = example();
        txs.push(tx("d", "Receita", 100, "2025-01-03", TxKind::Income));
        let s = daily_series(&txs);
        let dates: Vec<&str> = s.iter().map(|p| p.bucket.as_str()).collect();
        assert_eq!(dates, ["2025-01-03", "2025-01-04", "2025-01-05"]);
        assert_eq!(s[0].income, Decimal::from(100));
        assert_eq!(s[0].expense, Decimal::from(50));

        txs.reverse();
        assert_eq!(daily_series(&txs), s);
    }

    #[test]
    fn monthly_series_buckets_by_month() {
        let s = monthly_series(&seed_transactions());
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].bucket, "2024-12");
        assert_eq!(s[0].expense, Decimal::from(80));
        assert_eq!(s[1].income, Decimal::from(6200));
        assert_eq!(s[1].expense, Decimal::from(2000));
    }

    #[test]
    fn calendar_day_total_example() {
        assert_eq!(
            calendar_day_total(&example(), 2025, 1, 4),
            Decimal::from(-450)
        );
        assert_eq!(
            calendar_day_total(&example(), 2025, 1, 5),
            Decimal::from(5000)
        );
        assert_eq!(calendar_day_total(&example(), 2025, 2, 30), Decimal::ZERO);
    }

    #[test]
    fn day_key_pads() {
        assert_eq!(day_key(2025, 1, 4), "2025-01-04");
        assert_eq!(day_key(2025, 12, 31), "2025-12-31");
    }

    #[test]
    fn month_calendar_layout() {
        let cal = month_calendar(&seed_transactions(), 2025, 1).unwrap();
        // 2025-01-01 is a Wednesday.
        assert_eq!(cal.leading_blanks, 3);
        assert_eq!(cal.days.len(), 31);
        assert_eq!(cal.days[0].total, Decimal::from(-1500));
        assert!(cal.days[4].has_transactions);
        assert!(!cal.days[10].has_transactions);

        let feb = month_calendar(&[], 2024, 2).unwrap();
        assert_eq!(feb.days.len(), 29);
        assert!(month_calendar(&[], 2025, 13).is_none());
    }

    #[test]
    fn recent_is_newest_first() {
        let txs = seed_transactions();
        let r = recent(&txs);
        assert_eq!(r[0].id, "1");
        assert_eq!(r[5].id, "6");
    }
}
