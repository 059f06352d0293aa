//! Core Kernel - Foundational types and utilities for payment scheduling
//!
//! This crate provides the building blocks used by the scheduling domain:
//! - Currency identifiers and money held in integer minor units
//! - Fee rates applied with exact decimal arithmetic and upward rounding
//! - Day arithmetic and weekend deferral for charge dates

pub mod money;
pub mod temporal;

pub use money::{Money, Currency, FeeRate, MoneyError};
pub use temporal::{TemporalError, add_days, defer_to_weekday, is_weekend};
