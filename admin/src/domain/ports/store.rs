//! Remote store port
//!
//! The admin API owns testimonial records. This trait is the narrow contract
//! the panel consumes; the transport behind it is not part of this crate.

use async_trait::async_trait;

use crate::domain::entities::{NewTestimonial, Testimonial, TestimonialId, TestimonialPatch};
use crate::error::StoreError;

/// Admin testimonial store
#[async_trait]
pub trait TestimonialStore: Send + Sync {
    /// Fetch every testimonial (`GET /api/admin/testimonials`)
    async fn list(&self) -> Result<Vec<Testimonial>, StoreError>;

    /// Persist a new record and return it with its assigned id
    /// (`POST /api/admin/testimonials`)
    async fn create(&self, record: &NewTestimonial) -> Result<Testimonial, StoreError>;

    /// Apply a partial update and return the full record
    /// (`PUT /api/admin/testimonials/{id}`)
    async fn update(
        &self,
        id: TestimonialId,
        patch: &TestimonialPatch,
    ) -> Result<Testimonial, StoreError>;

    /// Remove a record; the store echoes the id back
    /// (`DELETE /api/admin/testimonials/{id}`)
    async fn delete(&self, id: TestimonialId) -> Result<TestimonialId, StoreError>;
}
