//! The investment planner view-model.
//!
//! Owns the list of records and the single editing draft, turns user actions
//! into gateway calls and keeps a status line for the last action. All state
//! lives behind `&mut self`: callers process one action at a time and await it
//! before the next.

use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, error, info};

use super::investments_form::{InvestmentDraft, InvestmentField};
use super::investments_model::Investment;
use super::investments_traits::InvestmentGateway;
use super::investments_view::ScreenView;
use crate::constants::{
    CREATE_LABEL, INVESTMENT_CREATED_MESSAGE, INVESTMENT_DELETED_MESSAGE,
    INVESTMENT_UPDATED_MESSAGE, UPDATE_LABEL,
};
use crate::errors::Error;
use crate::utils::time_utils;

/// Whether a submit creates a new record or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(i64),
}

/// Mutating actions, used to word failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerAction {
    Create,
    Update,
    Delete,
}

impl PlannerAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "Create investment",
            Self::Update => "Update investment",
            Self::Delete => "Delete investment",
        }
    }

    /// Status line shown when the action fails.
    pub fn failure_message(&self, err: &Error) -> String {
        format!("{} failed: {}", self.label(), err)
    }
}

/// View-model for the investments screen.
pub struct InvestmentPlanner {
    gateway: Arc<dyn InvestmentGateway>,
    clock: fn() -> NaiveDate,
    records: Vec<Investment>,
    draft: InvestmentDraft,
    editing_id: Option<i64>,
    last_message: Option<String>,
}

impl InvestmentPlanner {
    /// Creates a planner in create mode with an empty list.
    pub fn new(gateway: Arc<dyn InvestmentGateway>) -> Self {
        Self::with_clock(gateway, time_utils::today)
    }

    /// Creates a planner whose blank drafts start on `clock()`.
    pub fn with_clock(gateway: Arc<dyn InvestmentGateway>, clock: fn() -> NaiveDate) -> Self {
        Self {
            gateway,
            clock,
            records: Vec::new(),
            draft: InvestmentDraft::blank(clock()),
            editing_id: None,
            last_message: None,
        }
    }

    pub fn records(&self) -> &[Investment] {
        &self.records
    }

    /// Records shown in the list. No filter exists, so this is every record.
    pub fn displayed_records(&self) -> &[Investment] {
        &self.records
    }

    pub fn draft(&self) -> &InvestmentDraft {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub fn mode(&self) -> EditMode {
        match self.editing_id {
            Some(id) => EditMode::Edit(id),
            None => EditMode::Create,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            EditMode::Create => CREATE_LABEL,
            EditMode::Edit(_) => UPDATE_LABEL,
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.draft.is_submit_disabled()
    }

    /// Reloads the list from the backend.
    ///
    /// On failure the error is logged and the current list is kept.
    pub async fn load(&mut self) {
        match self.gateway.list_all().await {
            Ok(records) => {
                debug!("Loaded {} investments", records.len());
                self.records = records;
            }
            Err(e) => error!("Error loading investments: {}", e),
        }
    }

    /// Coerces raw input into the draft.
    pub fn set_field(&mut self, field: InvestmentField, raw: &str) {
        self.draft.set_field(field, raw);
    }

    /// Submits the draft: update in edit mode, create otherwise.
    ///
    /// Returns `false` without calling the backend when submit is disabled.
    pub async fn submit(&mut self) -> bool {
        if self.is_submit_disabled() {
            debug!(
                "Submit ignored, invalid fields: {:?}",
                self.draft.invalid_fields()
            );
            return false;
        }
        match self.mode() {
            EditMode::Create => self.create_investment().await,
            EditMode::Edit(_) => self.update_investment().await,
        }
        true
    }

    /// Loads a record into the draft and switches to edit mode.
    pub async fn edit(&mut self, investment_id: i64) {
        match self.gateway.get_by_id(investment_id).await {
            Ok(investment) => {
                debug!("Editing investment {}", investment_id);
                self.draft = InvestmentDraft::from(investment);
                self.editing_id = Some(investment_id);
            }
            Err(e) => self.last_message = Some(format!("{:?}", e)),
        }
    }

    /// Deletes a record and returns to create mode, whatever was being edited.
    pub async fn delete(&mut self, investment_id: i64) {
        match self.gateway.delete_by_id(investment_id).await {
            Ok(_) => {
                info!("Deleted investment {}", investment_id);
                self.last_message = Some(INVESTMENT_DELETED_MESSAGE.to_string());
                self.load().await;
                self.reset_draft();
                self.editing_id = None;
            }
            Err(e) => self.fail(PlannerAction::Delete, &e),
        }
    }

    /// Snapshot of everything the screen shows.
    pub fn view(&self) -> ScreenView {
        ScreenView::new(
            self.displayed_records(),
            &self.draft,
            self.submit_label(),
            self.is_submit_disabled(),
            self.last_message.clone(),
        )
    }

    async fn create_investment(&mut self) {
        let investment = match self.draft.to_investment() {
            Ok(investment) => investment,
            Err(e) => return self.fail(PlannerAction::Create, &e),
        };
        match self.gateway.create(investment).await {
            Ok(created) => {
                info!("Created investment {}", created.investment_id);
                self.last_message = Some(INVESTMENT_CREATED_MESSAGE.to_string());
                self.load().await;
                self.reset_draft();
            }
            Err(e) => self.fail(PlannerAction::Create, &e),
        }
    }

    async fn update_investment(&mut self) {
        if self.editing_id.is_none() {
            return;
        }
        let investment = match self.draft.to_investment() {
            Ok(investment) => investment,
            Err(e) => return self.fail(PlannerAction::Update, &e),
        };
        match self.gateway.update(investment).await {
            Ok(updated) => {
                info!("Updated investment {}", updated.investment_id);
                self.last_message = Some(INVESTMENT_UPDATED_MESSAGE.to_string());
                self.load().await;
                self.reset_draft();
                self.editing_id = None;
            }
            Err(e) => self.fail(PlannerAction::Update, &e),
        }
    }

    fn reset_draft(&mut self) {
        self.draft = InvestmentDraft::blank((self.clock)());
    }

    fn fail(&mut self, action: PlannerAction, err: &Error) {
        debug!("{} failed: {:?}", action.label(), err);
        self.last_message = Some(action.failure_message(err));
    }
}
