//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Testimonial records, forms and validation
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
