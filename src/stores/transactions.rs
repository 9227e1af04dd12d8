// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDate, Utc};

use crate::models::{NewTransaction, Transaction, TransactionPatch, new_id, seed_transactions};
use crate::slots::{SlotStore, TRANSACTIONS_SLOT, load_json, save_json};

/// Transactions in insertion order.
pub struct RecordStore<S: SlotStore> {
    slots: S,
    items: Vec<Transaction>,
    loaded: bool,
}

impl<S: SlotStore> RecordStore<S> {
    pub fn new(slots: S) -> Self {
        Self {
            slots,
            items: Vec::new(),
            loaded: false,
        }
    }

    /// Constructs and loads in one step.
    pub fn open(slots: S) -> Result<Self> {
        let mut store = Self::new(slots);
        store.load()?;
        Ok(store)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Reads the persisted snapshot, falling back to the seed set when the
    /// slot is missing or unreadable. Only the first call has any effect.
    pub fn load(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        self.items = match load_json::<Vec<Transaction>, _>(&self.slots, TRANSACTIONS_SLOT)? {
            Some(items) => items,
            None => {
                tracing::info!("no usable transaction snapshot, using seed data");
                seed_transactions()
            }
        };
        self.loaded = true;
        self.persist()
    }

    pub fn snapshot(&self) -> &[Transaction] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, new: NewTransaction) -> Result<Transaction> {
        self.add_on(Utc::now().date_naive(), new)
    }

    pub(crate) fn add_on(&mut self, date: NaiveDate, new: NewTransaction) -> Result<Transaction> {
        self.load()?;
        let tx = Transaction {
            id: self.fresh_id(),
            description: new.description,
            category: new.category,
            amount: new.amount,
            date,
            kind: new.kind,
        };
        self.items.push(tx.clone());
        self.persist()?;
        Ok(tx)
    }

    /// Returns `false` when no record has this id.
    pub fn update(&mut self, id: &str, patch: TransactionPatch) -> Result<bool> {
        self.load()?;
        let Some(t) = self.items.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        patch.apply(t);
        self.persist()?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> Result<bool> {
        self.load()?;
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.load()?;
        self.items.clear();
        self.persist()
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = new_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&self) -> Result<()> {
        save_json(&self.slots, TRANSACTIONS_SLOT, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TxKind;
    use crate::slots::MemorySlots;
    use rust_decimal::Decimal;

    fn lunch() -> NewTransaction {
        NewTransaction {
            description: "Almoço".into(),
            category: "Alimentação".into(),
            amount: Decimal::from(-35),
            kind: TxKind::Expense,
        }
    }

    #[test]
    fn missing_slot_loads_seed_and_persists_it() {
        let slots = MemorySlots::new();
        let store = RecordStore::open(&slots).unwrap();
        assert!(store.is_loaded());
        assert_eq!(store.len(), 6);
        assert!(slots.read(TRANSACTIONS_SLOT).unwrap().is_some());
    }

    #[test]
    fn corrupt_slot_is_replaced_by_seed() {
        let slots = MemorySlots::new().with_slot(TRANSACTIONS_SLOT, "[{\"id\":");
        let store = RecordStore::open(&slots).unwrap();
        assert_eq!(store.snapshot(), seed_transactions().as_slice());
        let raw = slots.read(TRANSACTIONS_SLOT).unwrap().unwrap();
        assert!(serde_json::from_str::<Vec<Transaction>>(&raw).is_ok());
    }

    #[test]
    fn empty_array_is_respected() {
        let slots = MemorySlots::new().with_slot(TRANSACTIONS_SLOT, "[]");
        let store = RecordStore::open(&slots).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn add_appends_with_today_and_fresh_id() {
        let slots = MemorySlots::new();
        let mut store = RecordStore::open(&slots).unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let tx = store.add_on(day, lunch()).unwrap();
        assert_eq!(store.snapshot().last(), Some(&tx));
        assert_eq!(tx.date, day);
        assert!(seed_transactions().iter().all(|s| s.id != tx.id));
    }

    #[test]
    fn update_merges_only_given_fields() {
        let slots = MemorySlots::new();
        let mut store = RecordStore::open(&slots).unwrap();
        let patch = TransactionPatch {
            description: Some("Mercado".into()),
            ..Default::default()
        };
        assert!(store.update("2", patch).unwrap());
        let t = store.get("2").unwrap();
        assert_eq!(t.description, "Mercado");
        assert_eq!(t.amount, Decimal::from(-450));
        assert!(!store.update("nope", TransactionPatch::default()).unwrap());
    }

    #[test]
    fn remove_and_clear() {
        let slots = MemorySlots::new();
        let mut store = RecordStore::open(&slots).unwrap();
        assert!(store.remove("3").unwrap());
        assert!(!store.remove("3").unwrap());
        assert_eq!(store.len(), 5);
        store.clear().unwrap();

        let reloaded = RecordStore::open(&slots).unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn mutating_unloaded_store_loads_first() {
        let slots = MemorySlots::new();
        let mut store = RecordStore::new(&slots);
        assert!(!store.is_loaded());
        store.add(lunch()).unwrap();
        assert_eq!(store.len(), 7);
    }
}
