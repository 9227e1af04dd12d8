// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Entry-time validation: raw user input in, typed payloads out.

use regex::Regex;
use rust_decimal::Decimal;

use crate::errors::ValidationError;
use crate::models::{COLOR_PALETTE, NewCategory, NewTransaction, TxKind};

pub const MIN_PASSWORD_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct TransactionForm {
    pub description: String,
    pub category: String,
    pub amount: String,
    pub kind: TxKind,
}

impl TransactionForm {
    /// Amounts are entered unsigned; the sign comes from `kind`.
    pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let amount = parse_positive_amount(&self.amount)?;
        Ok(NewTransaction {
            description: description.to_string(),
            category: self.category.trim().to_string(),
            amount: signed_amount(amount, self.kind),
            kind: self.kind,
        })
    }
}

pub fn parse_positive_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    let amount = raw
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(amount)
}

pub fn signed_amount(magnitude: Decimal, kind: TxKind) -> Decimal {
    match kind {
        TxKind::Income => magnitude.abs(),
        TxKind::Expense => -magnitude.abs(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub sign_up: bool,
}

/// A login that passed the format checks. There is no credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub name: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let email = self.email.trim();
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        let name = self.name.trim();
        if self.sign_up && name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let name = if name.is_empty() {
            email.split('@').next().unwrap_or_default()
        } else {
            name
        };
        Ok(Credentials {
            email: email.to_string(),
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CategoryForm {
    pub name: String,
    pub kind: TxKind,
    pub color: Option<String>,
}

impl CategoryForm {
    pub fn validate(&self) -> Result<NewCategory, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyCategoryName);
        }
        let color = match self.color.as_deref() {
            Some(c) => validate_color(c)?,
            None => COLOR_PALETTE[0].to_string(),
        };
        Ok(NewCategory {
            name: name.to_string(),
            kind: self.kind,
            color,
        })
    }
}

pub fn validate_color(raw: &str) -> Result<String, ValidationError> {
    let c = raw.trim();
    match Regex::new(r"^#[0-9a-fA-F]{6}$") {
        Ok(re) if re.is_match(c) => Ok(c.to_ascii_lowercase()),
        _ => Err(ValidationError::InvalidColor(c.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx_form(amount: &str, kind: TxKind) -> TransactionForm {
        TransactionForm {
            description: " Mercado ".into(),
            category: "Alimentação".into(),
            amount: amount.into(),
            kind,
        }
    }

    #[test]
    fn zero_and_negative_amounts_rejected() {
        assert_eq!(
            tx_form("0", TxKind::Expense).validate(),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            tx_form("-5", TxKind::Income).validate(),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            tx_form("abc", TxKind::Income).validate(),
            Err(ValidationError::InvalidAmount("abc".into()))
        );
    }

    #[test]
    fn expense_amount_is_negated() {
        let t = tx_form("12.50", TxKind::Expense).validate().unwrap();
        assert_eq!(t.amount, Decimal::new(-1250, 2));
        assert_eq!(t.description, "Mercado");
        let t = tx_form("12.50", TxKind::Income).validate().unwrap();
        assert_eq!(t.amount, Decimal::new(1250, 2));
    }

    #[test]
    fn blank_description_rejected() {
        let mut f = tx_form("10", TxKind::Income);
        f.description = "   ".into();
        assert_eq!(f.validate(), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn login_rules() {
        let mut f = LoginForm {
            email: "ana@example.com".into(),
            password: "abc".into(),
            ..Default::default()
        };
        assert_eq!(f.validate().unwrap().name, "ana");

        f.password = "ab".into();
        assert_eq!(f.validate(), Err(ValidationError::PasswordTooShort(3)));

        f.password = "secret".into();
        f.email = "ana.example.com".into();
        assert_eq!(f.validate(), Err(ValidationError::InvalidEmail));

        f.email = "ana@example.com".into();
        f.sign_up = true;
        assert_eq!(f.validate(), Err(ValidationError::MissingName));
        f.name = "Ana".into();
        assert_eq!(f.validate().unwrap().name, "Ana");
    }

    #[test]
    fn category_color_checked() {
        let f = CategoryForm {
            name: "Pets".into(),
            kind: TxKind::Expense,
            color: None,
        };
        assert_eq!(f.validate().unwrap().color, "#10b981");

        let f = CategoryForm {
            color: Some("#ABCDEF".into()),
            ..f
        };
        assert_eq!(f.validate().unwrap().color, "#abcdef");

        let f = CategoryForm {
            color: Some("red".into()),
            ..f
        };
        assert_eq!(
            f.validate(),
            Err(ValidationError::InvalidColor("red".into()))
        );
        assert!(validate_color("#12345g").is_err());
        assert!(validate_color("#1234567").is_err());
    }
}
