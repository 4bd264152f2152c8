//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, RwLock};
use tokio::sync::Semaphore;

use crate::domain::entities::{NewTestimonial, Testimonial, TestimonialId, TestimonialPatch};
use crate::domain::ports::TestimonialStore;
use crate::error::StoreError;

// ============================================================================
// Mock Testimonial Store
// ============================================================================

/// A call received by the mock store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List,
    Create(NewTestimonial),
    Update(TestimonialId, TestimonialPatch),
    Delete(TestimonialId),
}

#[derive(Default)]
pub struct MockTestimonialStore {
    records: Arc<RwLock<BTreeMap<TestimonialId, Testimonial>>>,
    next_id: Arc<RwLock<i64>>,
    calls: Arc<RwLock<Vec<StoreCall>>>,
    should_fail: Arc<RwLock<bool>>,
    failing_updates: Arc<RwLock<HashSet<TestimonialId>>>,
    /// When set, create/update wait for a permit before answering
    gate: Option<Arc<Semaphore>>,
}

impl MockTestimonialStore {
    pub fn new() -> Self {
        Self {
            next_id: Arc::new(RwLock::new(1)),
            ..Self::default()
        }
    }

    /// Every call fails with `StoreError::Unavailable`
    pub fn failing() -> Self {
        let store = Self::new();
        store.set_failing(true);
        store
    }

    /// Create/update stay pending until `release` is called
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::new()
        }
    }

    /// Pre-populate with records for testing
    pub fn with_records(records: Vec<Testimonial>) -> Self {
        let store = Self::new();
        {
            let mut next_id = store.next_id.write().unwrap();
            let mut stored = store.records.write().unwrap();
            for record in records {
                *next_id = (*next_id).max(record.id.0 + 1);
                stored.insert(record.id, record);
            }
        }
        store
    }

    pub fn set_failing(&self, fail: bool) {
        *self.should_fail.write().unwrap() = fail;
    }

    /// Make updates to one id fail with a 500
    pub fn fail_updates_for(&self, id: TestimonialId) {
        self.failing_updates.write().unwrap().insert(id);
    }

    /// Let one gated call through
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn snapshot(&self) -> Vec<Testimonial> {
        self.records.read().unwrap().values().cloned().collect()
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.read().unwrap().clone()
    }

    /// Ids of every update received, in arrival order
    pub fn update_ids(&self) -> Vec<TestimonialId> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Update(id, _) => Some(id),
                _ => None,
            })
            .collect()
    }

    /// (id, order) for every order-carrying update received
    pub fn order_updates(&self) -> Vec<(TestimonialId, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Update(id, patch) => patch.order.map(|order| (id, order)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: StoreCall) {
        self.calls.write().unwrap().push(call);
    }

    fn check_failing(&self) -> Result<(), StoreError> {
        if *self.should_fail.read().unwrap() {
            Err(StoreError::Unavailable("mock store failure".to_string()))
        } else {
            Ok(())
        }
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await;
        }
    }
}

#[async_trait]
impl TestimonialStore for MockTestimonialStore {
    async fn list(&self) -> Result<Vec<Testimonial>, StoreError> {
        self.record(StoreCall::List);
        self.check_failing()?;
        Ok(self.snapshot())
    }

    async fn create(&self, record: &NewTestimonial) -> Result<Testimonial, StoreError> {
        self.record(StoreCall::Create(record.clone()));
        self.wait_for_gate().await;
        self.check_failing()?;

        let id = {
            let mut next_id = self.next_id.write().unwrap();
            let id = TestimonialId(*next_id);
            *next_id += 1;
            id
        };
        let created = record.clone().with_id(id);
        self.records.write().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: TestimonialId,
        patch: &TestimonialPatch,
    ) -> Result<Testimonial, StoreError> {
        self.record(StoreCall::Update(id, patch.clone()));
        self.wait_for_gate().await;
        self.check_failing()?;
        if self.failing_updates.read().unwrap().contains(&id) {
            return Err(StoreError::Api {
                status: 500,
                message: format!("mock update failure for {}", id),
            });
        }

        let mut records = self.records.write().unwrap();
        let record = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        record.apply(patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: TestimonialId) -> Result<TestimonialId, StoreError> {
        self.record(StoreCall::Delete(id));
        self.check_failing()?;
        self.records
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| id)
            .ok_or(StoreError::NotFound(id))
    }
}
