//! Admin console session
//!
//! Runs parsed commands against the testimonial editor and renders replies.
//! Every failure becomes a notification line; nothing here aborts the session.

use testimonial_admin::{
    AppError, CloseOutcome, DialogMode, ReorderOutcome, Testimonial, TestimonialEditor,
    TestimonialForm, TestimonialPatch, TestimonialStore,
};

use crate::commands::{help_text, parse_command, ConsoleCommand};

/// What the console should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Quit,
}

pub struct Console<S>
where
    S: TestimonialStore,
{
    editor: TestimonialEditor<S>,
}

fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "*".repeat(filled), ".".repeat(5 - filled))
}

fn render_row(record: &Testimonial) -> String {
    format!(
        "#{:<4} [{:>3}] {} {} - {}{}",
        record.id,
        record.order,
        stars(record.rating),
        record.name,
        record.service,
        if record.is_active { "" } else { " (hidden)" }
    )
}

fn render_list(title: &str, records: &[Testimonial]) -> String {
    if records.is_empty() {
        return format!("{}: none", title);
    }
    let rows: Vec<String> = records.iter().map(render_row).collect();
    format!("{} ({}):\n{}", title, records.len(), rows.join("\n"))
}

fn render_form(mode: &DialogMode, form: &TestimonialForm) -> String {
    let heading = match mode {
        DialogMode::Closed => return "No form is open".to_string(),
        DialogMode::CreateOpen => "New testimonial".to_string(),
        DialogMode::EditOpen(record) => format!("Editing #{}", record.id),
    };
    let rows = [
        ("name", form.name.clone()),
        ("service", form.service.clone()),
        ("testimonial", form.testimonial.clone()),
        ("gender", form.gender.clone()),
        ("rating", form.rating.to_string()),
        ("active", form.is_active.to_string()),
        ("order", form.order.to_string()),
        ("photo", form.photo.clone().unwrap_or_else(|| "-".to_string())),
    ];
    let rows: Vec<String> = rows
        .iter()
        .map(|(label, value)| format!("  {:<12} {}", format!("{}:", label), value))
        .collect();
    format!("{}\n{}", heading, rows.join("\n"))
}

impl<S> Console<S>
where
    S: TestimonialStore,
{
    pub fn new(editor: TestimonialEditor<S>) -> Self {
        Self { editor }
    }

    /// Handle one line of input
    pub async fn handle_line(&self, line: &str) -> Reply {
        if line.trim().is_empty() {
            return Reply::Print(String::new());
        }
        match parse_command(line) {
            Ok(ConsoleCommand::Quit) => Reply::Quit,
            Ok(command) => match self.execute(command).await {
                Ok(output) => Reply::Print(output),
                Err(e) => Reply::Print(format!("Error: {}", e.user_message())),
            },
            Err(e) => Reply::Print(format!("{} (type `help` for commands)", e)),
        }
    }

    async fn execute(&self, command: ConsoleCommand) -> Result<String, AppError> {
        let service = self.editor.service();
        match command {
            ConsoleCommand::List => Ok(render_list("Testimonials", &service.all().await)),

            ConsoleCommand::Active => Ok(render_list("Public", &service.active().await)),

            ConsoleCommand::New => {
                self.editor.open_create().await?;
                self.show().await
            }

            ConsoleCommand::Edit { id } => {
                self.editor.open_edit(id).await?;
                self.show().await
            }

            ConsoleCommand::Set { field, value } => {
                self.editor.set_field(field, &value).await?;
                Ok(format!("{} updated", field))
            }

            ConsoleCommand::Show => self.show().await,

            ConsoleCommand::Save => {
                let saved = self.editor.submit().await?;
                Ok(format!("Saved {}", render_row(&saved)))
            }

            ConsoleCommand::Close => Ok(describe_close(self.editor.request_close().await)),

            ConsoleCommand::Confirm { discard } => {
                Ok(describe_close(self.editor.resolve_discard(discard).await))
            }

            ConsoleCommand::Delete { id } => {
                let deleted = self.editor.delete(id).await?;
                Ok(format!("Deleted #{}", deleted))
            }

            ConsoleCommand::Move { dragged, over } => {
                match self.editor.drop_item(dragged, over).await? {
                    ReorderOutcome::Unchanged => Ok("Order unchanged".to_string()),
                    ReorderOutcome::Reordered { persisted } => Ok(format!(
                        "Order updated for {} testimonials\n{}",
                        persisted,
                        render_list("Testimonials", &service.all().await)
                    )),
                }
            }

            ConsoleCommand::Toggle { id } => {
                let current = service.get(id).await.ok_or(AppError::NotFound(id))?;
                let updated = service
                    .update(id, &TestimonialPatch::active(!current.is_active))
                    .await?;
                Ok(format!("Updated {}", render_row(&updated)))
            }

            ConsoleCommand::Reload => {
                let count = service.load().await?;
                Ok(format!("Loaded {} testimonials", count))
            }

            ConsoleCommand::Help => Ok(help_text()),

            ConsoleCommand::Quit => Ok(String::new()),
        }
    }

    async fn show(&self) -> Result<String, AppError> {
        let mode = self.editor.mode().await;
        let form = self.editor.form().await;
        Ok(render_form(&mode, &form))
    }
}

fn describe_close(outcome: CloseOutcome) -> String {
    match outcome {
        CloseOutcome::Closed => "Closed".to_string(),
        CloseOutcome::AlreadyClosed => "No form is open".to_string(),
        CloseOutcome::Suppressed => "Still saving, please wait".to_string(),
        CloseOutcome::ConfirmationRequired => {
            "You have unsaved changes. Discard them? (yes/no)".to_string()
        }
        CloseOutcome::KeptOpen => "Form kept open".to_string(),
    }
}
