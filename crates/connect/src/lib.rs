//! Investment Planner Connect - HTTP access to the investments backend.
//!
//! This crate provides [`InvestmentApiClient`], the reqwest-backed
//! implementation of the core `InvestmentGateway` trait.

pub mod client;

// Re-export commonly used types
pub use client::{InvestmentApiClient, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
