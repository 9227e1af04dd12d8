// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::db;
use crate::notify::DEFAULT_DURATION;

pub const DB_ENV: &str = "FINBOARD_DB";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub notification_duration: Duration,
    pub verbose: bool,
}

impl Config {
    /// `--db` (or `FINBOARD_DB`, resolved by clap) wins over the platform
    /// data dir.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let db_path = match m.get_one::<PathBuf>("db") {
            Some(p) => p.clone(),
            None => db::default_db_path()?,
        };
        let notification_duration = m
            .get_one::<u64>("notify_ms")
            .map(|ms| Duration::from_millis(*ms))
            .unwrap_or(DEFAULT_DURATION);
        Ok(Self {
            db_path,
            notification_duration,
            verbose: m.get_flag("verbose"),
        })
    }
}
