//! In-memory testimonial store
//!
//! Behaves like the admin API (assigns ids, applies partial updates, echoes
//! deleted ids) without any transport. Used by the console.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{NewTestimonial, Testimonial, TestimonialId, TestimonialPatch};
use crate::domain::ports::TestimonialStore;
use crate::error::StoreError;

#[derive(Default)]
struct StoreState {
    records: BTreeMap<TestimonialId, Testimonial>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryTestimonialStore {
    state: RwLock<StoreState>,
    /// Ids whose updates are answered with a server error
    rejected_updates: HashSet<TestimonialId>,
}

impl InMemoryTestimonialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with existing records
    pub fn with_records(records: Vec<Testimonial>) -> Self {
        let next_id = records.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        let records = records.into_iter().map(|t| (t.id, t)).collect();
        Self {
            state: RwLock::new(StoreState { records, next_id }),
            rejected_updates: HashSet::new(),
        }
    }

    /// Store seeded from a JSON array of testimonials
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<Testimonial> = serde_json::from_str(json)?;
        Ok(Self::with_records(records))
    }

    /// Answer updates for these ids with a 500
    pub fn reject_updates_for(mut self, ids: impl IntoIterator<Item = TestimonialId>) -> Self {
        self.rejected_updates.extend(ids);
        self
    }
}

#[async_trait]
impl TestimonialStore for InMemoryTestimonialStore {
    async fn list(&self) -> Result<Vec<Testimonial>, StoreError> {
        let state = self.state.read().await;
        Ok(state.records.values().cloned().collect())
    }

    async fn create(&self, record: &NewTestimonial) -> Result<Testimonial, StoreError> {
        let mut state = self.state.write().await;
        state.next_id = state.next_id.max(1);
        let id = TestimonialId(state.next_id);
        state.next_id += 1;

        let created = record.clone().with_id(id);
        state.records.insert(id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: TestimonialId,
        patch: &TestimonialPatch,
    ) -> Result<Testimonial, StoreError> {
        if self.rejected_updates.contains(&id) {
            return Err(StoreError::Api {
                status: 500,
                message: format!("update rejected for testimonial {}", id),
            });
        }
        let mut state = self.state.write().await;
        let record = state
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        record.apply(patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: TestimonialId) -> Result<TestimonialId, StoreError> {
        let mut state = self.state.write().await;
        state
            .records
            .remove(&id)
            .map(|_| id)
            .ok_or(StoreError::NotFound(id))
    }
}
