// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};

use crate::slots::SlotStore;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Finboard", "finboard"));

pub fn default_db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().join("finboard.sqlite"))
}

/// Slot storage backed by a single SQLite table.
pub struct SqliteSlots {
    conn: Connection,
}

impl SqliteSlots {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).context("Failed to create data dir")?;
        }
        let conn =
            Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS slots(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    Ok(())
}

impl SlotStore for SqliteSlots {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let v = self
            .conn
            .query_row("SELECT value FROM slots WHERE key=?1", params![slot], |r| {
                r.get(0)
            })
            .optional()
            .with_context(|| format!("Read slot '{}'", slot))?;
        Ok(v)
    }

    fn write(&self, slot: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO slots(key, value) VALUES(?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
                params![slot, value],
            )
            .with_context(|| format!("Write slot '{}'", slot))?;
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM slots WHERE key=?1", params![slot])
            .with_context(|| format!("Remove slot '{}'", slot))?;
        Ok(())
    }
}
