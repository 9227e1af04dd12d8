// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Short-lived user-facing messages.
//!
//! Each notification carries its own deadline. Expiry is evaluated when the
//! owner calls [`NotificationQueue::sweep`]; explicit removal wins over a
//! pending expiry.

use std::fmt;
use std::time::{Duration, Instant};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub duration: Duration,
    /// `None` when the deadline lies beyond what `Instant` can represent.
    expires_at: Option<Instant>,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

#[derive(Debug)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
    default_duration: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::with_default_duration(DEFAULT_DURATION)
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_duration(default_duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            default_duration,
        }
    }

    pub fn add(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.add_with_duration(message, kind, self.default_duration)
    }

    pub fn add_with_duration(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration: Duration,
    ) -> u64 {
        self.push_at(Instant::now(), message.into(), kind, duration)
    }

    fn push_at(
        &mut self,
        now: Instant,
        message: String,
        kind: NotificationKind,
        duration: Duration,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message,
            kind,
            duration,
            expires_at: now.checked_add(duration),
        });
        id
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drops every notification whose deadline has passed.
    pub fn sweep(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }

    pub fn visible(&self, now: Instant) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(move |n| !n.is_expired(now))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Takes all pending notifications, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.items)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.add(message, NotificationKind::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.add(message, NotificationKind::Error)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.add(message, NotificationKind::Info)
    }
}
