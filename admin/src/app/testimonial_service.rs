//! Testimonial service
//!
//! Runs create/update/delete and drag reorders against the remote store and
//! reconciles the local cache afterwards. The cache is only touched once the
//! store has confirmed a change.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::RwLock;

use super::cache::{CacheKey, TestimonialCache};
use super::reorder::{plan_reorder, DragDrop};
use crate::domain::entities::{NewTestimonial, Testimonial, TestimonialId, TestimonialPatch};
use crate::domain::ports::TestimonialStore;
use crate::error::AppError;

/// What a drag gesture ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// No-op drop; nothing was sent to the store
    Unchanged,
    /// Every record was persisted at its new position
    Reordered { persisted: usize },
}

/// Service for managing testimonials
pub struct TestimonialService<S>
where
    S: TestimonialStore,
{
    store: Arc<S>,
    cache: RwLock<TestimonialCache>,
}

impl<S> TestimonialService<S>
where
    S: TestimonialStore,
{
    /// Service with an empty cache; call `load` to fill it
    pub fn new(store: Arc<S>) -> Self {
        Self::with_records(store, Vec::new())
    }

    /// Service over an already-fetched list
    pub fn with_records(store: Arc<S>, records: Vec<Testimonial>) -> Self {
        Self {
            store,
            cache: RwLock::new(TestimonialCache::from_records(records)),
        }
    }

    /// Fetch the full list and replace the cache
    pub async fn load(&self) -> Result<usize, AppError> {
        let records = self.store.list().await?;
        let count = records.len();
        *self.cache.write().await = TestimonialCache::from_records(records);
        tracing::info!(count, "Loaded testimonials");
        Ok(count)
    }

    pub async fn all(&self) -> Vec<Testimonial> {
        self.cache.read().await.all().to_vec()
    }

    pub async fn active(&self) -> Vec<Testimonial> {
        self.cache.read().await.active()
    }

    pub async fn view(&self, key: CacheKey) -> Vec<Testimonial> {
        self.cache.read().await.view(key)
    }

    pub async fn get(&self, id: TestimonialId) -> Option<Testimonial> {
        self.cache.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.cache.read().await.len()
    }

    /// Create a testimonial.
    ///
    /// The new record lands in the admin view sorted by order, and in the
    /// public view only if active.
    pub async fn create(&self, record: &NewTestimonial) -> Result<Testimonial, AppError> {
        record.validate()?;

        let created = self.store.create(record).await.map_err(|e| {
            tracing::warn!("Failed to create testimonial: {}", e);
            e
        })?;

        self.cache.write().await.insert(created.clone());
        tracing::info!(id = %created.id, "Created testimonial");
        Ok(created)
    }

    /// Apply a partial update.
    ///
    /// The record keeps its slot in the admin view. The public view picks up
    /// or drops the record according to its new `is_active`.
    pub async fn update(
        &self,
        id: TestimonialId,
        patch: &TestimonialPatch,
    ) -> Result<Testimonial, AppError> {
        patch.validate()?;

        let updated = self.store.update(id, patch).await.map_err(|e| {
            tracing::warn!(%id, "Failed to update testimonial: {}", e);
            e
        })?;

        if !self.cache.write().await.replace(updated.clone()) {
            tracing::warn!(%id, "Updated testimonial was not in the cache");
        }
        tracing::info!(%id, active = updated.is_active, "Updated testimonial");
        Ok(updated)
    }

    /// Delete a testimonial from the store and both views
    pub async fn delete(&self, id: TestimonialId) -> Result<TestimonialId, AppError> {
        let deleted = self.store.delete(id).await.map_err(|e| {
            tracing::warn!(%id, "Failed to delete testimonial: {}", e);
            e
        })?;

        self.cache.write().await.remove(id);
        tracing::info!(%deleted, "Deleted testimonial");
        Ok(deleted)
    }

    /// Persist a drag-and-drop reorder.
    ///
    /// Every record in the admin list is sent its new position, concurrently.
    /// The cache only changes if all of them succeed; a partial failure leaves
    /// the list as it was and may leave the store holding a mixed order.
    pub async fn reorder(&self, gesture: DragDrop) -> Result<ReorderOutcome, AppError> {
        let sequence = self.all().await;
        let Some(plan) = plan_reorder(&sequence, gesture) else {
            tracing::debug!(?gesture, "Ignoring no-op drop");
            return Ok(ReorderOutcome::Unchanged);
        };

        let total = plan.len();
        let results = join_all(plan.iter().map(|record| {
            let id = record.id;
            let patch = TestimonialPatch::order(record.order);
            async move { (id, self.store.update(id, &patch).await) }
        }))
        .await;

        let failed: Vec<TestimonialId> = results
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!(%id, "Failed to persist order: {}", e);
                    Some(id)
                }
            })
            .collect();

        if !failed.is_empty() {
            return Err(AppError::ReorderFailed { failed, total });
        }

        self.cache.write().await.replace_all(plan);
        tracing::info!(
            dragged = %gesture.dragged,
            persisted = total,
            "Reordered testimonials"
        );
        Ok(ReorderOutcome::Reordered { persisted: total })
    }
}
