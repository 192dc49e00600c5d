//! Investment gateway trait.
//!
//! This trait defines the contract with the investments backend without any
//! transport-specific types, allowing the view-model to run against the HTTP
//! client or a test double.

use async_trait::async_trait;

use super::investments_model::Investment;
use crate::errors::Result;

/// Trait defining the backend operations available for investments.
///
/// Every call is a single round trip: implementations must not retry, cache
/// or de-duplicate requests.
#[async_trait]
pub trait InvestmentGateway: Send + Sync {
    /// Fetches every investment.
    async fn list_all(&self) -> Result<Vec<Investment>>;

    /// Fetches a single investment by its ID.
    async fn get_by_id(&self, investment_id: i64) -> Result<Investment>;

    /// Creates an investment.
    ///
    /// The record is sent as-is, including the unsaved placeholder id; the
    /// backend assigns the real id and returns the persisted record.
    async fn create(&self, investment: Investment) -> Result<Investment>;

    /// Replaces the investment identified by `investment.investment_id`.
    async fn update(&self, investment: Investment) -> Result<Investment>;

    /// Deletes an investment by its ID.
    ///
    /// Returns whatever the backend answered; callers do not rely on it.
    async fn delete_by_id(&self, investment_id: i64) -> Result<serde_json::Value>;
}
