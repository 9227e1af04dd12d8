// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finboard::{cli, commands, config::Config, db::SqliteSlots, logging};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let config = Config::from_matches(&matches)?;
    logging::init_tracing(config.verbose);

    if matches.subcommand().is_none() {
        cli::build_cli().print_help()?;
        println!();
        return Ok(());
    }

    let slots = SqliteSlots::open(&config.db_path)?;
    let mut app = commands::App::open(&slots, config.notification_duration)?;
    if let Some(("init", _)) = matches.subcommand() {
        println!("Database initialized at {}", config.db_path.display());
    }

    let res = commands::dispatch(&mut app, &matches);
    app.flush_notices();
    res
}
