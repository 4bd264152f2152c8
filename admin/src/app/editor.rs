//! Testimonial editor
//!
//! The admin panel flow: a form bound to the create/edit dialog, submitted
//! through the testimonial service. Editor state is never locked across a
//! store call, so close requests are seen while a save is pending.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::dialog::{CloseOutcome, DialogMode, DialogState};
use super::reorder::DragDrop;
use super::testimonial_service::{ReorderOutcome, TestimonialService};
use crate::domain::entities::{
    Field, Testimonial, TestimonialForm, TestimonialId, TestimonialPatch,
};
use crate::domain::ports::TestimonialStore;
use crate::error::AppError;

struct EditorState {
    dialog: DialogState,
    form: TestimonialForm,
}

pub struct TestimonialEditor<S>
where
    S: TestimonialStore,
{
    service: Arc<TestimonialService<S>>,
    state: Mutex<EditorState>,
}

impl<S> TestimonialEditor<S>
where
    S: TestimonialStore,
{
    pub fn new(service: Arc<TestimonialService<S>>) -> Self {
        Self {
            service,
            state: Mutex::new(EditorState {
                dialog: DialogState::new(),
                form: TestimonialForm::blank(0),
            }),
        }
    }

    pub fn service(&self) -> &TestimonialService<S> {
        &self.service
    }

    pub async fn mode(&self) -> DialogMode {
        self.state.lock().await.dialog.mode().clone()
    }

    pub async fn is_submitting(&self) -> bool {
        self.state.lock().await.dialog.is_submitting()
    }

    pub async fn form(&self) -> TestimonialForm {
        self.state.lock().await.form.clone()
    }

    /// Open the dialog for a new record placed at the end of the list
    pub async fn open_create(&self) -> Result<(), AppError> {
        let len = self.service.len().await;
        let mut state = self.state.lock().await;
        state.dialog.open_create()?;
        state.form = TestimonialForm::blank(len);
        Ok(())
    }

    /// Open the dialog pre-filled with a cached record
    pub async fn open_edit(&self, id: TestimonialId) -> Result<(), AppError> {
        let record = self.service.get(id).await.ok_or(AppError::NotFound(id))?;
        let mut state = self.state.lock().await;
        let form = TestimonialForm::from_record(&record);
        state.dialog.open_edit(record)?;
        state.form = form;
        Ok(())
    }

    /// Set one form field from text input
    pub async fn set_field(&self, field: Field, value: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().await;
        if !state.dialog.is_open() {
            return Err(AppError::NoOpenDialog);
        }
        state.form.set_field(field, value)?;
        Ok(())
    }

    /// Edit the form in place
    pub async fn update_form<F>(&self, edit: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut TestimonialForm),
    {
        let mut state = self.state.lock().await;
        if !state.dialog.is_open() {
            return Err(AppError::NoOpenDialog);
        }
        edit(&mut state.form);
        Ok(())
    }

    /// Cancel or dismiss the dialog
    pub async fn request_close(&self) -> CloseOutcome {
        let mut state = self.state.lock().await;
        let EditorState { dialog, form } = &mut *state;
        let unsaved = dialog
            .editing()
            .map(|record| form.has_unsaved_changes(record))
            .unwrap_or(false);
        dialog.request_close(unsaved)
    }

    /// Answer the "discard changes?" prompt
    pub async fn resolve_discard(&self, confirmed: bool) -> CloseOutcome {
        self.state.lock().await.dialog.resolve_discard(confirmed)
    }

    /// Validate the form and create or update depending on the open dialog.
    ///
    /// On success the dialog closes and the form resets to blank defaults.
    /// On failure the dialog stays open with the form intact.
    pub async fn submit(&self) -> Result<Testimonial, AppError> {
        let (target, record) = {
            let mut state = self.state.lock().await;
            if !state.dialog.is_open() {
                return Err(AppError::NoOpenDialog);
            }
            if state.dialog.is_submitting() {
                return Err(AppError::Busy);
            }
            let record = state.form.validate()?;
            state.dialog.begin_submit()?;
            (state.dialog.editing().map(|r| r.id), record)
        };

        let result = match target {
            None => self.service.create(&record).await,
            Some(id) => self.service.update(id, &TestimonialPatch::from(record)).await,
        };

        let len = self.service.len().await;
        let mut state = self.state.lock().await;
        state.dialog.finish_submit(result.is_ok());
        if result.is_ok() {
            state.form = TestimonialForm::blank(len);
        }
        result
    }

    /// Delete a record. Does not touch the dialog.
    pub async fn delete(&self, id: TestimonialId) -> Result<TestimonialId, AppError> {
        self.service.delete(id).await
    }

    /// Handle the end of a drag gesture
    pub async fn drop_item(
        &self,
        dragged: TestimonialId,
        over: Option<TestimonialId>,
    ) -> Result<ReorderOutcome, AppError> {
        self.service.reorder(DragDrop::new(dragged, over)).await
    }
}
