// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{Category, CategoryPatch, NewCategory, TxKind, new_id, seed_categories};
use crate::slots::{CATEGORIES_SLOT, SlotStore, load_json, save_json};

/// User-defined categories. Removing one never touches transactions that
/// mention it by name.
pub struct CategoryStore<S: SlotStore> {
    slots: S,
    items: Vec<Category>,
    loaded: bool,
}

impl<S: SlotStore> CategoryStore<S> {
    pub fn new(slots: S) -> Self {
        Self {
            slots,
            items: Vec::new(),
            loaded: false,
        }
    }

    pub fn open(slots: S) -> Result<Self> {
        let mut store = Self::new(slots);
        store.load()?;
        Ok(store)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn load(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        self.items = match load_json::<Vec<Category>, _>(&self.slots, CATEGORIES_SLOT)? {
            Some(items) => items,
            None => {
                tracing::info!("no usable category snapshot, using defaults");
                seed_categories()
            }
        };
        self.loaded = true;
        self.persist()
    }

    pub fn snapshot(&self) -> &[Category] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.items.iter().find(|c| c.id == id)
    }

    /// Categories of one kind (or all), in collection order.
    pub fn by_kind(&self, kind: Option<TxKind>) -> Vec<&Category> {
        self.items
            .iter()
            .filter(|c| kind.is_none_or(|k| c.kind == k))
            .collect()
    }

    /// `None` for names no category carries any more.
    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.color.as_str())
    }

    pub fn add(&mut self, new: NewCategory) -> Result<Category> {
        self.load()?;
        let mut id = new_id();
        while self.get(&id).is_some() {
            id = new_id();
        }
        let cat = Category {
            id,
            name: new.name,
            kind: new.kind,
            color: new.color,
        };
        self.items.push(cat.clone());
        self.persist()?;
        Ok(cat)
    }

    pub fn update(&mut self, id: &str, patch: CategoryPatch) -> Result<bool> {
        self.load()?;
        let Some(c) = self.items.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };
        patch.apply(c);
        self.persist()?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> Result<bool> {
        self.load()?;
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        save_json(&self.slots, CATEGORIES_SLOT, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::MemorySlots;

    #[test]
    fn defaults_on_first_run() {
        let slots = MemorySlots::new();
        let store = CategoryStore::open(&slots).unwrap();
        assert_eq!(store.snapshot().len(), 9);
        assert_eq!(store.by_kind(Some(TxKind::Income)).len(), 2);
        assert_eq!(store.by_kind(Some(TxKind::Expense)).len(), 7);
        assert_eq!(store.by_kind(None).len(), 9);
    }

    #[test]
    fn add_update_remove_round_trip_through_slots() {
        let slots = MemorySlots::new();
        let mut store = CategoryStore::open(&slots).unwrap();
        let pets = store
            .add(NewCategory {
                name: "Pets".into(),
                kind: TxKind::Expense,
                color: "#ef4444".into(),
            })
            .unwrap();
        assert!(
            store
                .update(
                    &pets.id,
                    CategoryPatch {
                        color: Some("#f97316".into()),
                        ..Default::default()
                    },
                )
                .unwrap()
        );

        let reloaded = CategoryStore::open(&slots).unwrap();
        assert_eq!(reloaded.color_of("Pets"), Some("#f97316"));

        let mut store = reloaded;
        assert!(store.remove(&pets.id).unwrap());
        assert_eq!(store.color_of("Pets"), None);
        assert!(!store.remove(&pets.id).unwrap());
    }
}
