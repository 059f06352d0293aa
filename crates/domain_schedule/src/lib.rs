//! Scheduling Domain - Payment Schedule Calculation
//!
//! This crate turns a set of commercial terms into an ordered list of dated,
//! currency-tagged charges. It is a pure calculation: no state survives a
//! call and nothing is charged, stored or sent anywhere.
//!
//! # Terms
//!
//! - **Net**: the whole amount is charged once, at the end of the duration
//! - **Installments**: the amount is split into three charges; the first two
//!   are evenly spaced from the start date and the last falls exactly at the
//!   end of the duration
//!
//! # Pipeline
//!
//! 1. Validation rejects malformed requests, first failing rule wins
//! 2. The total is split into installment and remainder (installments only)
//! 3. The variable fee is applied to each part separately, rounding up
//! 4. Charge dates are computed and moved off weekends
//! 5. The remainder is folded into the final charge
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_schedule::{compute_schedule, ScheduleRequest, TermType};
//! use core_kernel::Currency;
//!
//! let request = ScheduleRequest::new(
//!     TermType::Installments,
//!     3001,
//!     5,
//!     60,
//!     start_date,
//!     Currency::USD,
//! );
//!
//! let schedule = compute_schedule(&request)?;
//! assert_eq!(schedule.len(), 3);
//! ```

pub mod terms;
pub mod request;
pub mod validation;
pub mod allocation;
pub mod calendar;
pub mod payment;
pub mod calculator;
pub mod error;

pub use terms::{TermType, NUM_INSTALLMENTS};
pub use request::ScheduleRequest;
pub use allocation::{InstallmentSplit, split_installments};
pub use payment::{ScheduledPayment, PaymentSchedule};
pub use calculator::{ScheduleCalculator, compute_schedule};
pub use error::ScheduleError;
