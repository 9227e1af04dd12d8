// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::errors::ValidationError;
use crate::forms::LoginForm;
use crate::models::{User, new_id};
use crate::slots::{SESSION_SLOT, SlotStore, load_json, save_json};

/// The logged-in user, if any. Presence of the slot is the whole gate.
pub struct SessionStore<S: SlotStore> {
    slots: S,
    user: Option<User>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl<S: SlotStore> SessionStore<S> {
    pub fn open(slots: S) -> Result<Self> {
        let user = load_json::<User, _>(&slots, SESSION_SLOT)?;
        Ok(Self { slots, user })
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self, form: &LoginForm) -> Result<User, LoginError> {
        let creds = form.validate()?;
        let user = User {
            id: new_id(),
            email: creds.email,
            name: creds.name,
        };
        save_json(&self.slots, SESSION_SLOT, &user)?;
        tracing::info!(email = %user.email, "logged in");
        self.user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.slots.remove(SESSION_SLOT)?;
        if let Some(u) = self.user.take() {
            tracing::info!(email = %u.email, "logged out");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::MemorySlots;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    #[test]
    fn login_persists_and_logout_clears() {
        let slots = MemorySlots::new();
        let mut session = SessionStore::open(&slots).unwrap();
        assert!(!session.is_logged_in());

        let user = session.login(&form("bia@mail.com", "1234")).unwrap();
        assert_eq!(user.name, "bia");

        let again = SessionStore::open(&slots).unwrap();
        assert_eq!(again.current(), Some(&user));

        session.logout().unwrap();
        assert!(!SessionStore::open(&slots).unwrap().is_logged_in());
    }

    #[test]
    fn invalid_login_leaves_no_session() {
        let slots = MemorySlots::new();
        let mut session = SessionStore::open(&slots).unwrap();
        let err = session.login(&form("nobody", "1234")).unwrap_err();
        assert!(matches!(
            err,
            LoginError::Invalid(ValidationError::InvalidEmail)
        ));
        assert!(slots.read(SESSION_SLOT).unwrap().is_none());
    }

    #[test]
    fn garbage_session_means_logged_out() {
        let slots = MemorySlots::new().with_slot(SESSION_SLOT, "oops");
        assert!(!SessionStore::open(&slots).unwrap().is_logged_in());
    }
}
