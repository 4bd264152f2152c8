//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{NewTestimonial, Testimonial, TestimonialForm, TestimonialId};

/// Create an active test testimonial; `order` follows the id
pub fn test_testimonial(id: i64) -> Testimonial {
    Testimonial {
        id: TestimonialId(id),
        name: format!("Customer {}", id),
        service: "Kitchen remodel".to_string(),
        testimonial: format!("Great experience number {}", id),
        gender: "female".to_string(),
        rating: 5,
        is_active: true,
        order: (id - 1).max(0) as u32,
        photo: None,
    }
}

/// Create a test testimonial with a specific order and visibility
pub fn test_testimonial_with(id: i64, order: u32, is_active: bool) -> Testimonial {
    Testimonial {
        order,
        is_active,
        ..test_testimonial(id)
    }
}

/// Ids `1..=count` with orders `0..count`, all active
pub fn test_testimonials(count: i64) -> Vec<Testimonial> {
    (1..=count).map(test_testimonial).collect()
}

/// Create a valid record ready to send to the store
pub fn test_new_testimonial() -> NewTestimonial {
    NewTestimonial {
        name: "New Customer".to_string(),
        service: "Garden design".to_string(),
        testimonial: "Beautiful result".to_string(),
        gender: "male".to_string(),
        rating: 4,
        is_active: true,
        order: 0,
        photo: Some("new-customer.jpg".to_string()),
    }
}

/// Fill the required text fields of a form, leaving order alone
pub fn fill_form(form: &mut TestimonialForm) {
    form.name = "Form Customer".to_string();
    form.service = "Roofing".to_string();
    form.testimonial = "Fast and tidy".to_string();
    form.gender = "male".to_string();
}
