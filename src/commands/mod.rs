// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod categories;
pub mod exporter;
pub mod reports;
pub mod transactions;

use std::time::{Duration, Instant};

use anyhow::{Result, bail};

use crate::notify::{NotificationKind, NotificationQueue};
use crate::slots::SlotStore;
use crate::stores::{CategoryStore, RecordStore, SessionStore};

/// Everything a command can touch, loaded once per invocation.
pub struct App<S: SlotStore> {
    pub transactions: RecordStore<S>,
    pub categories: CategoryStore<S>,
    pub session: SessionStore<S>,
    pub notices: NotificationQueue,
}

impl<S: SlotStore + Copy> App<S> {
    pub fn open(slots: S, notice_duration: Duration) -> Result<Self> {
        Ok(Self {
            transactions: RecordStore::open(slots)?,
            categories: CategoryStore::open(slots)?,
            session: SessionStore::open(slots)?,
            notices: NotificationQueue::with_default_duration(notice_duration),
        })
    }
}

impl<S: SlotStore> App<S> {
    pub fn require_session(&self) -> Result<()> {
        if !self.session.is_logged_in() {
            bail!("Not logged in; run `finboard login` first");
        }
        Ok(())
    }

    /// Prints whatever is still live to stderr and empties the queue.
    pub fn flush_notices(&mut self) {
        self.notices.sweep(Instant::now());
        for n in self.notices.drain() {
            match n.kind {
                NotificationKind::Error => eprintln!("✗ {}", n.message),
                _ => eprintln!("[{}] {}", n.kind, n.message),
            }
        }
    }
}

pub fn dispatch<S: SlotStore>(app: &mut App<S>, matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("init", _)) | None => {}
        Some(("login", sub)) => auth::login(app, sub)?,
        Some(("logout", _)) => auth::logout(app)?,
        Some(("whoami", _)) => auth::whoami(app),
        Some((name, sub)) => {
            app.require_session()?;
            match name {
                "tx" => transactions::handle(app, sub)?,
                "category" => categories::handle(app, sub)?,
                "report" => reports::handle(app, sub)?,
                "export" => exporter::handle(app, sub)?,
                _ => {}
            }
        }
    }
    Ok(())
}
