//! Client-side testimonial cache
//!
//! Holds one authoritative ordered collection. The admin list and the public
//! (active-only) list are projections of it, recomputed on read, so the two
//! views cannot drift apart.

use crate::domain::entities::{Testimonial, TestimonialId};

/// The two views the panel keeps warm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Every testimonial, as shown in the admin list
    All,
    /// Active testimonials only, as shown on the public site
    Active,
}

impl CacheKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKey::All => "testimonials",
            CacheKey::Active => "active-testimonials",
        }
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestimonialCache {
    records: Vec<Testimonial>,
}

fn sort_by_order(records: &mut [Testimonial]) {
    // stable: equal orders keep their relative position
    records.sort_by_key(|t| t.order);
}

impl TestimonialCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache over a pre-loaded list, sorted by `order`
    pub fn from_records(mut records: Vec<Testimonial>) -> Self {
        sort_by_order(&mut records);
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: TestimonialId) -> Option<&Testimonial> {
        self.records.iter().find(|t| t.id == id)
    }

    /// Admin view
    pub fn all(&self) -> &[Testimonial] {
        &self.records
    }

    /// Public view: active records in `order` sequence
    pub fn active(&self) -> Vec<Testimonial> {
        let mut active: Vec<Testimonial> =
            self.records.iter().filter(|t| t.is_active).cloned().collect();
        sort_by_order(&mut active);
        active
    }

    pub fn view(&self, key: CacheKey) -> Vec<Testimonial> {
        match key {
            CacheKey::All => self.records.clone(),
            CacheKey::Active => self.active(),
        }
    }

    /// Add a newly created record and re-sort
    pub fn insert(&mut self, record: Testimonial) {
        self.records.retain(|t| t.id != record.id);
        self.records.push(record);
        sort_by_order(&mut self.records);
    }

    /// Swap in an updated record at its current position.
    ///
    /// Returns false when the id is not cached; the record is then left out.
    pub fn replace(&mut self, record: Testimonial) -> bool {
        match self.records.iter_mut().find(|t| t.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TestimonialId) -> Option<Testimonial> {
        let index = self.records.iter().position(|t| t.id == id)?;
        Some(self.records.remove(index))
    }

    /// Replace the whole collection with an already-ordered sequence
    pub fn replace_all(&mut self, records: Vec<Testimonial>) {
        self.records = records;
    }
}
