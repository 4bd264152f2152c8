//! Testimonial admin panel core
//!
//! Form-backed list editor for testimonial records: create, edit, delete and
//! drag-to-reorder against a remote admin store, with a local cache that is
//! reconciled after every confirmed change.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;

pub use adapters::InMemoryTestimonialStore;
pub use app::{
    CacheKey, CloseOutcome, DialogMode, DragDrop, ReorderOutcome, TestimonialEditor,
    TestimonialService,
};
pub use domain::entities::{
    Field, NewTestimonial, Testimonial, TestimonialForm, TestimonialId, TestimonialPatch,
    ValidationErrors,
};
pub use domain::ports::TestimonialStore;
pub use error::{AppError, StoreError};
