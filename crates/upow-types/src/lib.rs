//! Core types and constants for the uPow ledger.
//!
//! This crate provides the foundational pieces used across all uPow crates:
//! protocol constants, the output/input/transaction type enums, and the
//! fixed-point [`Amount`] type with its wire encoding.

pub mod amount;
pub mod constants;

pub use amount::{Amount, AmountError};
pub use constants::{InputType, OutputType, TransactionKind};
