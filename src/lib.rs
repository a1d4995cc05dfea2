//! Statutory Payroll Deduction Engine
//!
//! This crate computes government-mandated payroll contributions (social
//! insurance, health insurance, housing fund) from a salary figure, and the
//! downstream gross-pay/net-pay aggregation for a pay period. It backs the
//! employee portal's salary estimator and payroll report service.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
