// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::App;
use crate::forms::LoginForm;
use crate::slots::SlotStore;
use crate::stores::session::LoginError;

pub fn login<S: SlotStore>(app: &mut App<S>, sub: &clap::ArgMatches) -> Result<()> {
    let form = LoginForm {
        email: sub.get_one::<String>("email").cloned().unwrap_or_default(),
        password: sub.get_one::<String>("password").cloned().unwrap_or_default(),
        name: sub.get_one::<String>("name").cloned().unwrap_or_default(),
        sign_up: sub.get_flag("sign_up"),
    };
    match app.session.login(&form) {
        Ok(user) => {
            app.notices.success(format!("Welcome, {}!", user.name));
            Ok(())
        }
        Err(LoginError::Invalid(err)) => {
            app.notices.error("Login failed. Check your details.");
            Err(err.into())
        }
        Err(LoginError::Storage(err)) => Err(err),
    }
}

pub fn logout<S: SlotStore>(app: &mut App<S>) -> Result<()> {
    app.session.logout()?;
    app.notices.info("Logged out");
    Ok(())
}

pub fn whoami<S: SlotStore>(app: &App<S>) {
    match app.session.current() {
        Some(u) => println!("{} <{}>", u.name, u.email),
        None => println!("Not logged in"),
    }
}
