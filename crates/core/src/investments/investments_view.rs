//! Render model for the investments screen.

use std::fmt;

use serde::Serialize;

use super::investments_form::{InvestmentDraft, InvestmentField};
use super::investments_model::Investment;
use crate::utils::time_utils::{format_display_date, format_input_date};

/// One line of the investments list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRow {
    pub investment_id: i64,
    pub summary: String,
}

impl From<&Investment> for InvestmentRow {
    fn from(investment: &Investment) -> Self {
        Self {
            investment_id: investment.investment_id,
            summary: format!(
                "{} - {} - {} - {} - {}",
                investment.investment_name,
                investment.initial_investment_amount,
                format_display_date(investment.investment_start_date),
                investment.current_value,
                investment.investor_id
            ),
        }
    }
}

/// A labelled form input and the value it currently holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Everything the investments screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenView {
    pub rows: Vec<InvestmentRow>,
    pub fields: Vec<FormFieldView>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub message: Option<String>,
}

impl ScreenView {
    pub fn new(
        records: &[Investment],
        draft: &InvestmentDraft,
        submit_label: &'static str,
        submit_disabled: bool,
        message: Option<String>,
    ) -> Self {
        let fields = InvestmentField::ALL
            .iter()
            .map(|field| FormFieldView {
                name: field.as_str(),
                label: field.label(),
                value: input_value(draft, *field),
            })
            .collect();

        Self {
            rows: records.iter().map(InvestmentRow::from).collect(),
            fields,
            submit_label,
            submit_disabled,
            message: message.filter(|m| !m.is_empty()),
        }
    }
}

/// Text an input shows for the draft: NaN and invalid dates show as empty.
fn input_value(draft: &InvestmentDraft, field: InvestmentField) -> String {
    let number = |v: f64| if v.is_nan() { String::new() } else { v.to_string() };
    match field {
        InvestmentField::InvestmentName => draft.investment_name.clone(),
        InvestmentField::InitialInvestmentAmount => number(draft.initial_investment_amount),
        InvestmentField::InvestmentStartDate => draft
            .investment_start_date
            .map(format_input_date)
            .unwrap_or_default(),
        InvestmentField::CurrentValue => number(draft.current_value),
        InvestmentField::InvestorId => number(draft.investor_id),
    }
}

impl fmt::Display for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "All Investments")?;
        if self.rows.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for row in &self.rows {
            writeln!(f, "  [{}] {}", row.investment_id, row.summary)?;
        }
        writeln!(f)?;
        writeln!(f, "Create/Update Investment")?;
        for field in &self.fields {
            writeln!(f, "  {}: {}", field.label, field.value)?;
        }
        if self.submit_disabled {
            writeln!(f, "  <{}> (disabled)", self.submit_label)?;
        } else {
            writeln!(f, "  <{}>", self.submit_label)?;
        }
        if let Some(message) = &self.message {
            writeln!(f)?;
            writeln!(f, "{}", message)?;
        }
        Ok(())
    }
}
