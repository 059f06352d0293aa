//! Request document accepted on the command line
//!
//! This is the only wire shape of a schedule request. Absent numeric fields
//! and currency default to zero values so that the calculator's validation,
//! not the JSON parser, reports what is missing. Integers are decoded at
//! 64 bits so an oversized fee is still a range error.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use core_kernel::Currency;
use domain_schedule::{terms, ScheduleRequest, TermType};

/// Errors turning a document into a request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("startDate is required unless --start-now is given")]
    MissingStartDate,
}

/// JSON shape of a schedule request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDocument {
    #[serde(default, deserialize_with = "terms::deserialize_lenient")]
    pub terms: Option<TermType>,
    #[serde(default)]
    pub amount_in_cents: i64,
    #[serde(default)]
    pub fee_percentage: i64,
    #[serde(default)]
    pub duration_days: i64,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl RequestDocument {
    /// Converts into a request, with `start_override` taking precedence over `startDate`
    pub fn into_request(
        self,
        start_override: Option<DateTime<Utc>>,
    ) -> Result<ScheduleRequest, DocumentError> {
        let start_date = start_override
            .or(self.start_date)
            .ok_or(DocumentError::MissingStartDate)?;

        Ok(ScheduleRequest {
            terms: self.terms,
            amount_in_cents: self.amount_in_cents,
            fee_percentage: self.fee_percentage,
            duration_days: self.duration_days,
            start_date,
            currency: Currency::new(self.currency.unwrap_or_default()),
        })
    }
}
