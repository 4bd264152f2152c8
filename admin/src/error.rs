//! Unified error types for the testimonial admin panel
//!
//! This module defines error types for each layer:
//! - `StoreError`: Remote admin store failures
//! - `AppError`: Operation boundary errors (what the panel reports to the user)

use thiserror::Error;

use crate::domain::entities::{TestimonialId, ValidationErrors};

/// Remote store errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Testimonial not found: {0}")]
    NotFound(TestimonialId),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Application layer errors - returned by the service and editor
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Testimonial {0} is not loaded")]
    NotFound(TestimonialId),

    #[error("A save is already in progress")]
    Busy,

    #[error("No dialog is open")]
    NoOpenDialog,

    #[error("Reorder failed for {} of {total} testimonials", .failed.len())]
    ReorderFailed {
        failed: Vec<TestimonialId>,
        total: usize,
    },
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl AppError {
    /// Notification text shown to the person using the panel
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(errors) => format!("Please fix the form: {}", errors),
            AppError::Store(StoreError::NotFound(id)) => {
                format!("Testimonial {} no longer exists", id)
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {}", e);
                "Something went wrong while saving. Please try again.".to_string()
            }
            AppError::NotFound(id) => format!("Testimonial {} not found", id),
            AppError::Busy => "Please wait for the current save to finish".to_string(),
            AppError::NoOpenDialog => "Open a testimonial first".to_string(),
            AppError::ReorderFailed { .. } => {
                tracing::error!("{}", self);
                "Failed to update the order. The list was not changed.".to_string()
            }
        }
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
