//! Investment Planner Core - Domain entities, form state and the planner view-model.
//!
//! This crate contains the client-side logic of the investment planning
//! screen. It is transport-agnostic and defines the [`InvestmentGateway`]
//! trait that is implemented by the `connect` crate.
//!
//! [`InvestmentGateway`]: investments::InvestmentGateway

pub mod constants;
pub mod errors;
pub mod investments;
pub mod utils;

// Re-export the investments interface
pub use investments::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
