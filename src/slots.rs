// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Named-slot persistence. Each slot holds one JSON document.

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const TRANSACTIONS_SLOT: &str = "finance_transactions";
pub const CATEGORIES_SLOT: &str = "finance_categories";
pub const SESSION_SLOT: &str = "currentUser";

/// Synchronous key-value storage for whole snapshots.
pub trait SlotStore {
    fn read(&self, slot: &str) -> Result<Option<String>>;
    fn write(&self, slot: &str, value: &str) -> Result<()>;
    fn remove(&self, slot: &str) -> Result<()>;
}

impl<T: SlotStore + ?Sized> SlotStore for &T {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: &str, value: &str) -> Result<()> {
        (**self).write(slot, value)
    }

    fn remove(&self, slot: &str) -> Result<()> {
        (**self).remove(slot)
    }
}

#[derive(Debug, Default)]
pub struct MemorySlots {
    inner: RefCell<HashMap<String, String>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a slot with raw text, valid JSON or not.
    pub fn with_slot(self, slot: &str, value: &str) -> Self {
        self.inner
            .borrow_mut()
            .insert(slot.to_string(), value.to_string());
        self
    }
}

impl SlotStore for MemorySlots {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.inner.borrow().get(slot).cloned())
    }

    fn write(&self, slot: &str, value: &str) -> Result<()> {
        self.inner
            .borrow_mut()
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<()> {
        self.inner.borrow_mut().remove(slot);
        Ok(())
    }
}

/// Reads and decodes a slot. A slot that fails to decode is logged and
/// reported as absent.
pub fn load_json<T, S>(slots: &S, slot: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: SlotStore + ?Sized,
{
    let Some(raw) = slots.read(slot)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(v) => Ok(Some(v)),
        Err(err) => {
            tracing::warn!(slot, %err, "discarding unreadable snapshot");
            Ok(None)
        }
    }
}

pub fn save_json<T, S>(slots: &S, slot: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: SlotStore + ?Sized,
{
    let raw = serde_json::to_string(value).with_context(|| format!("Encode slot '{}'", slot))?;
    slots.write(slot, &raw)?;
    tracing::debug!(slot, bytes = raw.len(), "slot persisted");
    Ok(())
}
