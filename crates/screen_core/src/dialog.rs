//! Dialog state as tagged unions, so an "open" flag can never drift apart
//! from the record it is bound to.

use shared::UserRecord;

/// Create/edit form dialog. `Edit` carries the bound record; `Create` binds
/// none. Transitions happen only on explicit orchestrator calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormDialog {
    #[default]
    Closed,
    Create,
    Edit(UserRecord),
}

impl FormDialog {
    pub fn open_create(&mut self) {
        *self = FormDialog::Create;
    }

    pub fn open_edit(&mut self, record: UserRecord) {
        *self = FormDialog::Edit(record);
    }

    pub fn close(&mut self) {
        *self = FormDialog::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, FormDialog::Closed)
    }

    /// The record under edit, if any.
    pub fn bound(&self) -> Option<&UserRecord> {
        match self {
            FormDialog::Edit(record) => Some(record),
            _ => None,
        }
    }
}

/// Delete-confirmation dialog bound to the record awaiting confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmDialog {
    #[default]
    Closed,
    Open(UserRecord),
}

impl ConfirmDialog {
    pub fn open(&mut self, record: UserRecord) {
        *self = ConfirmDialog::Open(record);
    }

    pub fn close(&mut self) {
        *self = ConfirmDialog::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmDialog::Open(_))
    }

    pub fn bound(&self) -> Option<&UserRecord> {
        match self {
            ConfirmDialog::Open(record) => Some(record),
            ConfirmDialog::Closed => None,
        }
    }
}
