//! Investments module - domain model, form state, gateway trait and the planner view-model.

mod investments_form;
mod investments_model;
mod investments_planner;
mod investments_traits;
mod investments_view;


// Re-export the public interface
pub use investments_form::{FieldUpdate, InvestmentDraft, InvestmentField};
pub use investments_model::Investment;
pub use investments_planner::{EditMode, InvestmentPlanner, PlannerAction};
pub use investments_traits::InvestmentGateway;
pub use investments_view::{FormFieldView, InvestmentRow, ScreenView};
