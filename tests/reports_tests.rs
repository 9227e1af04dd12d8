// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use finboard::aggregate::{balance_totals, calendar_day_total, category_breakdown};
use finboard::commands::{App, categories, reports};
use finboard::cli;
use finboard::slots::MemorySlots;
use rust_decimal::Decimal;

#[test]
fn breakdown_rows_carry_colors_and_shares() {
    let slots = MemorySlots::new();
    let app = App::open(&slots, Duration::from_secs(3)).unwrap();
    let rows = reports::breakdown_rows(&app);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Alimentação", "Entretenimento", "Habitação", "Saúde"]);
    assert_eq!(rows[0].color.as_deref(), Some("#f59e0b"));
    assert_eq!(rows[2].value, Decimal::from(1500));
    // 1500 / 2080
    assert_eq!(rows[2].share, Decimal::new(721, 1));

    let v = serde_json::to_value(&rows).unwrap();
    assert_eq!(v[2]["value"].as_f64(), Some(1500.0));
    assert!(v[2]["share"].as_f64().is_some_and(|s| (s - 72.1).abs() < 1e-9));
}

#[test]
fn deleting_category_keeps_transactions() {
    let slots = MemorySlots::new();
    let mut app = App::open(&slots, Duration::from_secs(3)).unwrap();
    let before = app.transactions.snapshot().to_vec();

    // "Habitação" has id 6 in the defaults.
    for argv in [
        &["finboard", "category", "rm", "6"][..],
        &["finboard", "category", "rm", "6", "--yes"][..],
    ] {
        let kept = !argv.contains(&"--yes");
        let matches = cli::build_cli().get_matches_from(argv);
        if let Some(("category", cat_m)) = matches.subcommand() {
            categories::handle(&mut app, cat_m).unwrap();
        } else {
            panic!("no category subcommand");
        }
        assert_eq!(app.categories.get("6").is_some(), kept);
    }
    assert_eq!(app.transactions.snapshot(), before.as_slice());

    let rows = reports::breakdown_rows(&app);
    let housing = rows.iter().find(|r| r.name == "Habitação").unwrap();
    assert_eq!(housing.color, None);
    assert_eq!(housing.value, Decimal::from(1500));
}

#[test]
fn seed_snapshot_totals() {
    let slots = MemorySlots::new();
    let app = App::open(&slots, Duration::from_secs(3)).unwrap();
    let txs = app.transactions.snapshot();
    let totals = balance_totals(txs);
    assert_eq!(totals.income, Decimal::from(6200));
    assert_eq!(totals.expense, Decimal::from(2080));
    assert_eq!(totals.balance, totals.income - totals.expense);

    let sum: Decimal = category_breakdown(txs).iter().map(|c| c.value).sum();
    assert_eq!(sum, totals.expense);
    assert_eq!(calendar_day_total(txs, 2025, 1, 4), Decimal::from(-450));
}

#[test]
fn category_add_validates_color() {
    let slots = MemorySlots::new();
    let mut app = App::open(&slots, Duration::from_secs(3)).unwrap();
    let matches = cli::build_cli().get_matches_from([
        "finboard", "category", "add", "--name", "Pets", "--type", "expense", "--color", "blue",
    ]);
    if let Some(("category", cat_m)) = matches.subcommand() {
        assert!(categories::handle(&mut app, cat_m).is_err());
    } else {
        panic!("no category subcommand");
    }
    assert_eq!(app.categories.snapshot().len(), 9);
}
