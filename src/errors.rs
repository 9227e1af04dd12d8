// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Rejected user input. Raised before any store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Description is required")]
    EmptyDescription,
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Please enter a valid e-mail address")]
    InvalidEmail,
    #[error("Password must have at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Please enter your name")]
    MissingName,
    #[error("Category name is required")]
    EmptyCategoryName,
    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),
}
