// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::App;
use crate::errors::ValidationError;
use crate::forms::{CategoryForm, validate_color};
use crate::models::{CategoryPatch, TxKind};
use crate::slots::SlotStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};

pub fn handle<S: SlotStore>(app: &mut App<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let kind: TxKind = sub
                .get_one::<String>("type")
                .ok_or_else(|| anyhow!("--type is required"))?
                .parse()?;
            let form = CategoryForm {
                name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
                kind,
                color: sub.get_one::<String>("color").cloned(),
            };
            let cat = app.categories.add(form.validate()?)?;
            app.notices
                .success(format!("Added category '{}' ({})", cat.name, cat.kind));
            println!("{}", cat.id);
        }
        Some(("list", sub)) => {
            let kind = sub
                .get_one::<String>("type")
                .map(|s| s.parse::<TxKind>())
                .transpose()?;
            let cats = app.categories.by_kind(kind);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
                let data = cats
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.clone(),
                            c.name.clone(),
                            c.kind.to_string(),
                            c.color.clone(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["ID", "Name", "Type", "Color"], data));
            }
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").map(String::as_str).unwrap_or_default();
            let name = match sub.get_one::<String>("name").map(|n| n.trim()) {
                Some("") => return Err(ValidationError::EmptyCategoryName.into()),
                other => other.map(str::to_string),
            };
            let patch = CategoryPatch {
                name,
                kind: sub
                    .get_one::<String>("type")
                    .map(|s| s.parse::<TxKind>())
                    .transpose()?,
                color: sub
                    .get_one::<String>("color")
                    .map(|c| validate_color(c))
                    .transpose()?,
            };
            if app.categories.update(id, patch)? {
                app.notices.success("Category updated");
            } else {
                app.notices.info(format!("No category with id '{}'", id));
            }
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").map(String::as_str).unwrap_or_default();
            if !sub.get_flag("yes") {
                app.notices
                    .info(format!("Category '{}' kept; pass --yes to delete it", id));
            } else if app.categories.remove(id)? {
                app.notices.success("Category removed");
            } else {
                app.notices.info(format!("No category with id '{}'", id));
            }
        }
        _ => {}
    }
    Ok(())
}
