//! Investment domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::UNSAVED_INVESTMENT_ID;

/// Domain model representing an investment record as exchanged with the backend.
///
/// `investment_id` is assigned by the backend; records that were never
/// persisted carry [`UNSAVED_INVESTMENT_ID`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub investment_id: i64,
    pub investment_name: String,
    pub initial_investment_amount: f64,
    #[serde(with = "date_format")]
    pub investment_start_date: NaiveDate,
    pub current_value: f64,
    /// Opaque reference to an investor; never resolved by this crate
    pub investor_id: i64,
}

impl Investment {
    /// Returns true if the backend has not assigned an id yet.
    pub fn is_unsaved(&self) -> bool {
        self.investment_id == UNSAVED_INVESTMENT_ID
    }
}

mod date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use crate::utils::time_utils::{format_input_date, parse_calendar_date};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_input_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid date value '{}'", raw)))
    }
}
