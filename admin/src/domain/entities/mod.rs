//! Domain entities
//!
//! Pure domain models for the testimonial admin panel.

pub mod form;
pub mod testimonial;

pub use form::{Field, FieldError, TestimonialForm, ValidationErrors};
pub use testimonial::{
    NewTestimonial, Testimonial, TestimonialId, TestimonialPatch, MAX_RATING, MIN_RATING,
};
