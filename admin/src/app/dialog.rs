//! Create/edit dialog state machine
//!
//! Closed -> CreateOpen | EditOpen(record) -> Closed. Closing is refused while
//! a save is in flight, and closing an edit with unsaved text asks for
//! confirmation first.

use crate::domain::entities::Testimonial;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Closed,
    CreateOpen,
    EditOpen(Testimonial),
}

/// Result of a close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The dialog is now closed
    Closed,
    /// Nothing was open
    AlreadyClosed,
    /// A save is in flight; the dialog stays open
    Suppressed,
    /// Unsaved edits; answer with `resolve_discard`
    ConfirmationRequired,
    /// Discard was declined; the dialog stays open
    KeptOpen,
}

#[derive(Debug, Clone)]
pub struct DialogState {
    mode: DialogMode,
    submitting: bool,
    confirming_discard: bool,
}

impl Default for DialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogState {
    pub fn new() -> Self {
        Self {
            mode: DialogMode::Closed,
            submitting: false,
            confirming_discard: false,
        }
    }

    pub fn mode(&self) -> &DialogMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != DialogMode::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn awaiting_confirmation(&self) -> bool {
        self.confirming_discard
    }

    /// Record being edited, if any
    pub fn editing(&self) -> Option<&Testimonial> {
        match &self.mode {
            DialogMode::EditOpen(record) => Some(record),
            _ => None,
        }
    }

    pub fn open_create(&mut self) -> Result<(), AppError> {
        self.open(DialogMode::CreateOpen)
    }

    pub fn open_edit(&mut self, record: Testimonial) -> Result<(), AppError> {
        self.open(DialogMode::EditOpen(record))
    }

    fn open(&mut self, mode: DialogMode) -> Result<(), AppError> {
        if self.submitting {
            return Err(AppError::Busy);
        }
        tracing::debug!(?mode, "Opening testimonial dialog");
        self.mode = mode;
        self.confirming_discard = false;
        Ok(())
    }

    fn close(&mut self) -> CloseOutcome {
        self.mode = DialogMode::Closed;
        self.confirming_discard = false;
        CloseOutcome::Closed
    }

    /// Cancel or dismiss. `unsaved_changes` is only consulted while editing.
    pub fn request_close(&mut self, unsaved_changes: bool) -> CloseOutcome {
        if !self.is_open() {
            return CloseOutcome::AlreadyClosed;
        }
        if self.submitting {
            tracing::debug!("Close suppressed while save is in flight");
            return CloseOutcome::Suppressed;
        }
        if self.editing().is_some() && unsaved_changes {
            self.confirming_discard = true;
            return CloseOutcome::ConfirmationRequired;
        }
        self.close()
    }

    /// Answer a pending discard confirmation
    pub fn resolve_discard(&mut self, confirmed: bool) -> CloseOutcome {
        if !self.is_open() {
            return CloseOutcome::AlreadyClosed;
        }
        if !self.confirming_discard {
            return CloseOutcome::KeptOpen;
        }
        if self.submitting {
            return CloseOutcome::Suppressed;
        }
        if confirmed {
            self.close()
        } else {
            self.confirming_discard = false;
            CloseOutcome::KeptOpen
        }
    }

    /// Mark a create/update as in flight
    pub fn begin_submit(&mut self) -> Result<(), AppError> {
        if !self.is_open() {
            return Err(AppError::NoOpenDialog);
        }
        if self.submitting {
            return Err(AppError::Busy);
        }
        self.submitting = true;
        self.confirming_discard = false;
        Ok(())
    }

    /// Clear the in-flight flag; a successful save closes the dialog
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_testimonial;

    #[test]
    fn starts_closed() {
        let dialog = DialogState::new();
        assert_eq!(dialog.mode(), &DialogMode::Closed);
        assert!(!dialog.is_submitting());
    }

    #[test]
    fn open_create_then_cancel() {
        let mut dialog = DialogState::new();
        dialog.open_create().unwrap();
        assert_eq!(dialog.mode(), &DialogMode::CreateOpen);

        // unsaved text never prompts on create
        assert_eq!(dialog.request_close(true), CloseOutcome::Closed);
        assert!(!dialog.is_open());
    }

    #[test]
    fn close_when_closed() {
        let mut dialog = DialogState::new();
        assert_eq!(dialog.request_close(false), CloseOutcome::AlreadyClosed);
        assert_eq!(dialog.resolve_discard(true), CloseOutcome::AlreadyClosed);
    }

    #[test]
    fn edit_without_changes_closes() {
        let mut dialog = DialogState::new();
        dialog.open_edit(test_testimonial(1)).unwrap();
        assert_eq!(dialog.editing().map(|t| t.id.0), Some(1));
        assert_eq!(dialog.request_close(false), CloseOutcome::Closed);
    }

    #[test]
    fn edit_with_changes_requires_confirmation() {
        let mut dialog = DialogState::new();
        dialog.open_edit(test_testimonial(1)).unwrap();

        assert_eq!(dialog.request_close(true), CloseOutcome::ConfirmationRequired);
        assert!(dialog.awaiting_confirmation());
        assert!(dialog.is_open());

        assert_eq!(dialog.resolve_discard(false), CloseOutcome::KeptOpen);
        assert!(!dialog.awaiting_confirmation());
        assert!(dialog.is_open());

        assert_eq!(dialog.request_close(true), CloseOutcome::ConfirmationRequired);
        assert_eq!(dialog.resolve_discard(true), CloseOutcome::Closed);
        assert!(!dialog.is_open());
    }

    #[test]
    fn resolve_without_pending_confirmation_keeps_open() {
        let mut dialog = DialogState::new();
        dialog.open_create().unwrap();
        assert_eq!(dialog.resolve_discard(true), CloseOutcome::KeptOpen);
        assert!(dialog.is_open());
    }

    #[test]
    fn close_suppressed_while_submitting() {
        let mut dialog = DialogState::new();
        dialog.open_create().unwrap();
        dialog.begin_submit().unwrap();

        assert_eq!(dialog.request_close(false), CloseOutcome::Suppressed);
        assert_eq!(dialog.mode(), &DialogMode::CreateOpen);
    }

    #[test]
    fn failed_submit_keeps_dialog_open() {
        let mut dialog = DialogState::new();
        dialog.open_edit(test_testimonial(3)).unwrap();
        dialog.begin_submit().unwrap();
        dialog.finish_submit(false);

        assert!(!dialog.is_submitting());
        assert!(dialog.editing().is_some());
    }

    #[test]
    fn successful_submit_closes() {
        let mut dialog = DialogState::new();
        dialog.open_create().unwrap();
        dialog.begin_submit().unwrap();
        dialog.finish_submit(true);

        assert!(!dialog.is_submitting());
        assert_eq!(dialog.mode(), &DialogMode::Closed);
    }

    #[test]
    fn begin_submit_requires_open_dialog() {
        let mut dialog = DialogState::new();
        assert!(matches!(dialog.begin_submit(), Err(AppError::NoOpenDialog)));
    }

    #[test]
    fn second_submit_is_busy() {
        let mut dialog = DialogState::new();
        dialog.open_create().unwrap();
        dialog.begin_submit().unwrap();
        assert!(matches!(dialog.begin_submit(), Err(AppError::Busy)));
        assert!(matches!(dialog.open_create(), Err(AppError::Busy)));
    }
}
