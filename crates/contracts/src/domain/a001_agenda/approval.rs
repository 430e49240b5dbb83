//! Agenda approval lifecycle
//!
//! Two states, `Pending` and `Approved`. A privileged viewer sees one control
//! per row: "Approve" on pending rows, "Delete" on approved rows. Everyone
//! else sees a read-only badge. The role only decides what is shown; the
//! backend is the authority on what is allowed.

use serde::{Deserialize, Serialize};

use crate::system::auth::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalState {
    Pending,
    Approved,
}

impl From<bool> for ApprovalState {
    fn from(status: bool) -> Self {
        if status {
            ApprovalState::Approved
        } else {
            ApprovalState::Pending
        }
    }
}

impl ApprovalState {
    /// Wire value of the `status` field
    pub fn as_status(&self) -> bool {
        matches!(self, ApprovalState::Approved)
    }

    /// Read-only badge text
    pub fn badge_label(&self) -> &'static str {
        match self {
            ApprovalState::Pending => "Pending",
            ApprovalState::Approved => "Approved",
        }
    }

    /// State after `action` succeeds; `None` means the record is gone
    pub fn apply(self, action: ApprovalAction) -> Option<ApprovalState> {
        match action {
            ApprovalAction::Approve => Some(ApprovalState::Approved),
            ApprovalAction::Remove => None,
        }
    }

    /// Action offered to `role` for a row in this state
    pub fn available_action(self, role: Role) -> Option<ApprovalAction> {
        if !role.is_privileged() {
            return None;
        }
        match self {
            ApprovalState::Pending => Some(ApprovalAction::Approve),
            ApprovalState::Approved => Some(ApprovalAction::Remove),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalAction {
    /// Sets the record to approved (`POST .../updateStatus/:id`)
    Approve,
    /// Deletes the record (`POST .../delete/:id`)
    Remove,
}

impl ApprovalAction {
    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalAction::Approve => "Approve",
            ApprovalAction::Remove => "Delete",
        }
    }

    /// Confirmation prompt shown before the network call
    pub fn confirm_prompt(&self, current: ApprovalState) -> &'static str {
        match (self, current) {
            (ApprovalAction::Approve, ApprovalState::Approved) => {
                "This agenda is already approved. Approve again?"
            }
            (ApprovalAction::Approve, ApprovalState::Pending) => "Approve this agenda?",
            (ApprovalAction::Remove, _) => "Are you sure you want to delete this agenda?",
        }
    }

    /// Fixed message shown when the call fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            ApprovalAction::Approve => "Failed to approve agenda.",
            ApprovalAction::Remove => "Failed to delete agenda.",
        }
    }
}

/// What the status column renders for one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    /// Clickable control for a privileged viewer
    Action(ApprovalAction),
    /// Read-only badge
    Badge(ApprovalState),
}

impl RowControl {
    pub fn for_row(role: Role, state: ApprovalState) -> Self {
        match state.available_action(role) {
            Some(action) => RowControl::Action(action),
            None => RowControl::Badge(state),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowControl::Action(action) => action.label(),
            RowControl::Badge(state) => state.badge_label(),
        }
    }
}

/// Header of the status column
pub fn status_column_title(role: Role) -> &'static str {
    if role.is_privileged() {
        "Actions"
    } else {
        "Status"
    }
}
