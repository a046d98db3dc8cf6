//! Headless core of the user-management screen: routes user intents into
//! store mutations, recomputes pagination, and surfaces dialog state,
//! validation errors, and one-shot notifications to the presentation layer.

pub mod dialog;
pub mod notify;
pub mod paginate;
pub mod validate;

pub use dialog::{ConfirmDialog, FormDialog};
pub use notify::{Notifier, RecordingNotifier, Severity, TracingNotifier};
pub use paginate::{paginate, PageView};
pub use validate::{validate, ValidationErrors};

use shared::{StoreError, UserDraft, UserId, UserRecord};
use store::UserStore;
use tracing::debug;

/// Records shown per table page.
pub const PAGE_SIZE: usize = 5;

/// Result of a `save` intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Draft passed validation and reached the store.
    Saved(UserId),
    /// Validation failed; errors are surfaced and the form stays open.
    Invalid,
    /// No form dialog was open; nothing happened.
    NotOpen,
}

/// Page orchestrator: owns the store, the pagination cursor, both dialogs,
/// and the last validation result. Single-threaded; every intent runs to
/// completion before the next.
#[derive(Debug)]
pub struct UsersScreen<N: Notifier> {
    store: UserStore,
    current_page: u32,
    form: FormDialog,
    confirm: ConfirmDialog,
    errors: ValidationErrors,
    notifier: N,
}

impl<N: Notifier> UsersScreen<N> {
    pub fn new(store: UserStore, notifier: N) -> Self {
        Self {
            store,
            current_page: 1,
            form: FormDialog::Closed,
            confirm: ConfirmDialog::Closed,
            errors: ValidationErrors::default(),
            notifier,
        }
    }

    // --- read model ---

    /// The slice of records for the page currently viewed, plus totals.
    pub fn page(&self) -> PageView<'_, UserRecord> {
        paginate(self.store.list(), PAGE_SIZE, self.current_page)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn records(&self) -> &[UserRecord] {
        self.store.list()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn form_dialog(&self) -> &FormDialog {
        &self.form
    }

    pub fn confirm_dialog(&self) -> &ConfirmDialog {
        &self.confirm
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    // --- intents ---

    /// Open the form dialog for a new record.
    pub fn open_create(&mut self) {
        debug!("intent: open create form");
        self.errors = ValidationErrors::default();
        self.form.open_create();
    }

    /// Open the form dialog bound to an existing record.
    pub fn open_edit(&mut self, id: UserId) -> Result<(), StoreError> {
        let record = self.store.get(id).ok_or(StoreError::NotFound(id))?.clone();
        debug!(user_id = id.0, "intent: open edit form");
        self.errors = ValidationErrors::default();
        self.form.open_edit(record);
        Ok(())
    }

    /// Validate and commit the draft from whichever form mode is open.
    ///
    /// On validation failure no store mutation occurs; the errors are kept in
    /// the read model and the dialog stays open. On success the bound id is
    /// reused for edits, a fresh id is allocated for creates, the dialog
    /// closes and a success notification names the record.
    pub fn save(&mut self, draft: &UserDraft) -> Result<SaveOutcome, StoreError> {
        let bound_id = match &self.form {
            FormDialog::Closed => {
                debug!("intent: save with no open form");
                return Ok(SaveOutcome::NotOpen);
            }
            FormDialog::Create => None,
            FormDialog::Edit(bound) => Some(bound.id),
        };

        let errors = validate::validate(draft);
        if !errors.is_empty() {
            debug!(
                name_err = errors.name.is_some(),
                email_err = errors.email.is_some(),
                role_err = errors.role.is_some(),
                "intent: save rejected by validation"
            );
            self.errors = errors;
            return Ok(SaveOutcome::Invalid);
        }
        let Some(role) = draft.role else {
            return Ok(SaveOutcome::Invalid);
        };

        let (id, verb) = match bound_id {
            Some(id) => (id, "updated"),
            None => (self.store.allocate_id(), "created"),
        };
        let record = UserRecord {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            role,
        };
        match bound_id {
            Some(_) => self.store.update(record)?,
            None => self.store.insert(record)?,
        }
        debug!(user_id = id.0, verb, "intent: save committed");

        self.form.close();
        self.errors = ValidationErrors::default();
        self.notifier.notify(
            &format!("User {} {verb} successfully.", draft.name),
            Severity::Success,
        );
        Ok(SaveOutcome::Saved(id))
    }

    /// Open the delete-confirmation dialog bound to the target record.
    pub fn request_delete(&mut self, id: UserId) -> Result<(), StoreError> {
        let record = self.store.get(id).ok_or(StoreError::NotFound(id))?.clone();
        debug!(user_id = id.0, "intent: request delete");
        self.confirm.open(record);
        Ok(())
    }

    /// Remove the record bound to the confirm dialog. If the page being
    /// viewed held exactly that one record and a prior page exists, the
    /// cursor steps back one page. The slice length is taken before the
    /// deletion.
    pub fn confirm_delete(&mut self) -> Result<(), StoreError> {
        let ConfirmDialog::Open(target) = &self.confirm else {
            debug!("intent: confirm delete with no open dialog");
            return Ok(());
        };
        let id = target.id;

        let visible_before = self.page().items.len();
        let removed = self.store.remove(id)?;
        debug!(user_id = id.0, "intent: confirmed delete");
        self.notifier.notify(
            &format!("User {} deleted successfully.", removed.name),
            Severity::Success,
        );
        self.confirm.close();

        if visible_before == 1 && self.current_page > 1 {
            self.current_page -= 1;
            debug!(page = self.current_page, "stepped back after emptying page");
        }
        Ok(())
    }

    /// Close the form dialog without saving.
    pub fn cancel_form(&mut self) {
        debug!("intent: cancel form");
        self.form.close();
        self.errors = ValidationErrors::default();
    }

    /// Close the confirm dialog without deleting.
    pub fn cancel_delete(&mut self) {
        debug!("intent: cancel delete");
        self.confirm.close();
    }

    /// Set the pagination cursor verbatim. Out-of-range pages are not
    /// rejected; the paginator clips them to an empty slice.
    pub fn set_page(&mut self, page: u32) {
        debug!(page, "intent: set page");
        self.current_page = page;
    }
}

#[cfg(test)]
mod tests;
