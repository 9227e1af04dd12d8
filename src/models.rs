// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }

    /// Label used in exports ("Receita" / "Despesa").
    pub fn export_label(self) -> &'static str {
        match self {
            TxKind::Income => "Receita",
            TxKind::Expense => "Despesa",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(anyhow::anyhow!(
                "Invalid type '{}', expected income|expense",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal, // signed: income > 0, expense < 0
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TxKind,
}

/// Fields supplied by the caller when recording a transaction; the store
/// assigns `id` and `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub category: String,
    pub amount: Decimal,
    pub kind: TxKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub kind: Option<TxKind>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        *self == TransactionPatch::default()
    }

    pub(crate) fn apply(self, t: &mut Transaction) {
        if let Some(d) = self.description {
            t.description = d;
        }
        if let Some(c) = self.category {
            t.category = c;
        }
        if let Some(a) = self.amount {
            t.amount = a;
        }
        if let Some(d) = self.date {
            t.date = d;
        }
        if let Some(k) = self.kind {
            t.kind = k;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub kind: TxKind,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub kind: Option<TxKind>,
    pub color: Option<String>,
}

impl CategoryPatch {
    pub(crate) fn apply(self, c: &mut Category) {
        if let Some(n) = self.name {
            c.name = n;
        }
        if let Some(k) = self.kind {
            c.kind = k;
        }
        if let Some(col) = self.color {
            c.color = col;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Offered to category entry; the first entry is the default color.
pub const COLOR_PALETTE: [&str; 12] = [
    "#10b981", "#06b6d4", "#f59e0b", "#8b5cf6", "#ec4899", "#6366f1", "#14b8a6", "#3b82f6",
    "#6b7280", "#ef4444", "#f97316", "#eab308",
];

fn seed_tx(
    id: &str,
    description: &str,
    category: &str,
    amount: i64,
    (y, m, d): (i32, u32, u32),
    kind: TxKind,
) -> Option<Transaction> {
    Some(Transaction {
        id: id.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        amount: Decimal::from(amount),
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        kind,
    })
}

/// Sample data shown when nothing has been persisted yet.
pub fn seed_transactions() -> Vec<Transaction> {
    use TxKind::*;
    [
        seed_tx("1", "Salário", "Receita", 5000, (2025, 1, 5), Income),
        seed_tx("2", "Supermercado", "Alimentação", -450, (2025, 1, 4), Expense),
        seed_tx("3", "Netflix", "Entretenimento", -50, (2025, 1, 3), Expense),
        seed_tx("4", "Freelance", "Receita", 1200, (2025, 1, 2), Income),
        seed_tx("5", "Aluguel", "Habitação", -1500, (2025, 1, 1), Expense),
        seed_tx("6", "Academia", "Saúde", -80, (2024, 12, 31), Expense),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn seed_categories() -> Vec<Category> {
    use TxKind::*;
    [
        ("1", "Receita", Income, "#10b981"),
        ("2", "Bônus", Income, "#06b6d4"),
        ("3", "Alimentação", Expense, "#f59e0b"),
        ("4", "Transporte", Expense, "#8b5cf6"),
        ("5", "Entretenimento", Expense, "#ec4899"),
        ("6", "Habitação", Expense, "#6366f1"),
        ("7", "Saúde", Expense, "#14b8a6"),
        ("8", "Educação", Expense, "#3b82f6"),
        ("9", "Utilities", Expense, "#6b7280"),
    ]
    .into_iter()
    .map(|(id, name, kind, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        color: color.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_json_uses_type_field_and_numeric_amount() {
        let txs = seed_transactions();
        let v = serde_json::to_value(&txs[1]).unwrap();
        assert_eq!(v["type"], "expense");
        assert_eq!(v["date"], "2025-01-04");
        assert!(v["amount"].is_number());
        assert_eq!(v["amount"].as_f64(), Some(-450.0));
    }

    #[test]
    fn transaction_reads_integer_amounts() {
        let raw = r#"{"id":"9","description":"x","category":"c","amount":12,"date":"2025-02-01","type":"income"}"#;
        let t: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(t.amount, Decimal::from(12));
        assert_eq!(t.kind, TxKind::Income);
    }

    #[test]
    fn seeds_are_complete() {
        assert_eq!(seed_transactions().len(), 6);
        assert_eq!(seed_categories().len(), 9);
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Income".parse::<TxKind>().unwrap(), TxKind::Income);
        assert!("refund".parse::<TxKind>().is_err());
    }

    #[test]
    fn fresh_ids_differ() {
        assert_ne!(new_id(), new_id());
    }
}
