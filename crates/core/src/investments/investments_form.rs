//! Form state for creating or editing an investment.
//!
//! The draft holds coerced input: numbers that failed to parse are kept as
//! `NaN` and an unparseable date is kept as `None`, so the form never rejects
//! a keystroke. Whether the draft can be submitted is decided separately by
//! [`InvestmentDraft::is_submit_disabled`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::investments_model::Investment;
use crate::constants::UNSAVED_INVESTMENT_ID;
use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::parse_calendar_date;

/// The editable fields of an investment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvestmentField {
    InvestmentName,
    InitialInvestmentAmount,
    InvestmentStartDate,
    CurrentValue,
    InvestorId,
}

impl InvestmentField {
    /// All fields in form order.
    pub const ALL: [InvestmentField; 5] = [
        InvestmentField::InvestmentName,
        InvestmentField::InitialInvestmentAmount,
        InvestmentField::InvestmentStartDate,
        InvestmentField::CurrentValue,
        InvestmentField::InvestorId,
    ];

    /// Wire/input name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvestmentName => "investmentName",
            Self::InitialInvestmentAmount => "initialInvestmentAmount",
            Self::InvestmentStartDate => "investmentStartDate",
            Self::CurrentValue => "currentValue",
            Self::InvestorId => "investorId",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvestmentName => "Investment Name",
            Self::InitialInvestmentAmount => "Initial Amount",
            Self::InvestmentStartDate => "Start Date",
            Self::CurrentValue => "Current Value",
            Self::InvestorId => "Investor ID",
        }
    }
}

impl fmt::Display for InvestmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        InvestmentField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::Validation(ValidationError::UnknownField(s.to_string())))
    }
}

/// A typed change to a single form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    InvestmentName(String),
    InitialInvestmentAmount(f64),
    InvestmentStartDate(Option<NaiveDate>),
    CurrentValue(f64),
    InvestorId(f64),
}

impl FieldUpdate {
    /// Coerces raw input for `field` into a typed update.
    ///
    /// Numeric fields become `NaN` when the input is not a number, dates become
    /// `None` when invalid, the name is kept verbatim. Never fails.
    pub fn coerce(field: InvestmentField, raw: &str) -> Self {
        match field {
            InvestmentField::InvestmentName => Self::InvestmentName(raw.to_string()),
            InvestmentField::InitialInvestmentAmount => {
                Self::InitialInvestmentAmount(parse_number_input(raw))
            }
            InvestmentField::InvestmentStartDate => {
                Self::InvestmentStartDate(parse_calendar_date(raw))
            }
            InvestmentField::CurrentValue => Self::CurrentValue(parse_number_input(raw)),
            InvestmentField::InvestorId => Self::InvestorId(parse_number_input(raw)),
        }
    }

    /// The field this update targets.
    pub fn field(&self) -> InvestmentField {
        match self {
            Self::InvestmentName(_) => InvestmentField::InvestmentName,
            Self::InitialInvestmentAmount(_) => InvestmentField::InitialInvestmentAmount,
            Self::InvestmentStartDate(_) => InvestmentField::InvestmentStartDate,
            Self::CurrentValue(_) => InvestmentField::CurrentValue,
            Self::InvestorId(_) => InvestmentField::InvestorId,
        }
    }
}

fn parse_number_input(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// The id must survive truncation to `i64` without saturating.
fn is_valid_investor_id(value: f64) -> bool {
    let id = value.trunc();
    id.is_finite() && id >= i64::MIN as f64 && id < i64::MAX as f64
}

/// The record currently being created or edited.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentDraft {
    pub investment_id: i64,
    pub investment_name: String,
    pub initial_investment_amount: f64,
    pub investment_start_date: Option<NaiveDate>,
    pub current_value: f64,
    pub investor_id: f64,
}

impl InvestmentDraft {
    /// A new-record draft: unsaved id, empty name, zero amounts, `start_date`.
    pub fn blank(start_date: NaiveDate) -> Self {
        Self {
            investment_id: UNSAVED_INVESTMENT_ID,
            investment_name: String::new(),
            initial_investment_amount: 0.0,
            investment_start_date: Some(start_date),
            current_value: 0.0,
            investor_id: 0.0,
        }
    }

    /// Applies a typed field update.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::InvestmentName(name) => self.investment_name = name,
            FieldUpdate::InitialInvestmentAmount(v) => self.initial_investment_amount = v,
            FieldUpdate::InvestmentStartDate(date) => self.investment_start_date = date,
            FieldUpdate::CurrentValue(v) => self.current_value = v,
            FieldUpdate::InvestorId(v) => self.investor_id = v,
        }
    }

    /// Coerces raw input and applies it to `field`.
    pub fn set_field(&mut self, field: InvestmentField, raw: &str) {
        self.apply(FieldUpdate::coerce(field, raw));
    }

    /// Returns true if this draft holds a backend record rather than a new one.
    pub fn is_persisted(&self) -> bool {
        self.investment_id != UNSAVED_INVESTMENT_ID
    }

    /// Fields whose current value blocks submission, in form order.
    pub fn invalid_fields(&self) -> Vec<InvestmentField> {
        let mut invalid = Vec::new();
        if self.investment_name.is_empty() {
            invalid.push(InvestmentField::InvestmentName);
        }
        if !self.initial_investment_amount.is_finite() {
            invalid.push(InvestmentField::InitialInvestmentAmount);
        }
        if self.investment_start_date.is_none() {
            invalid.push(InvestmentField::InvestmentStartDate);
        }
        if !self.current_value.is_finite() {
            invalid.push(InvestmentField::CurrentValue);
        }
        if !is_valid_investor_id(self.investor_id) {
            invalid.push(InvestmentField::InvestorId);
        }
        invalid
    }

    /// Whether the create/update action must be unavailable.
    pub fn is_submit_disabled(&self) -> bool {
        !self.invalid_fields().is_empty()
    }

    /// Converts the draft into a record ready to send.
    ///
    /// The investor id is truncated toward zero.
    pub fn to_investment(&self) -> Result<Investment> {
        if let Some(field) = self.invalid_fields().first() {
            let err = match field {
                InvestmentField::InvestmentName => {
                    ValidationError::MissingField(field.as_str().to_string())
                }
                _ => ValidationError::InvalidInput(format!("{} is not valid", field.label())),
            };
            return Err(Error::Validation(err));
        }
        let investment_start_date = self.investment_start_date.ok_or_else(|| {
            Error::Validation(ValidationError::MissingField(
                InvestmentField::InvestmentStartDate.as_str().to_string(),
            ))
        })?;

        Ok(Investment {
            investment_id: self.investment_id,
            investment_name: self.investment_name.clone(),
            initial_investment_amount: self.initial_investment_amount,
            investment_start_date,
            current_value: self.current_value,
            investor_id: self.investor_id.trunc() as i64,
        })
    }
}

impl From<Investment> for InvestmentDraft {
    fn from(investment: Investment) -> Self {
        Self {
            investment_id: investment.investment_id,
            investment_name: investment.investment_name,
            initial_investment_amount: investment.initial_investment_amount,
            investment_start_date: Some(investment.investment_start_date),
            current_value: investment.current_value,
            investor_id: investment.investor_id as f64,
        }
    }
}
