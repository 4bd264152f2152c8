//! Testimonial domain entity
//!
//! A customer testimonial shown on the public site. Records are owned by the
//! remote admin store; the panel only holds copies.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a testimonial
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestimonialId(pub i64);

impl From<i64> for TestimonialId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TestimonialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TestimonialId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim_start_matches('#')
            .parse::<i64>()
            .map(TestimonialId)
            .map_err(|_| format!("'{}' is not a valid testimonial id", s))
    }
}

/// Lowest accepted star rating
pub const MIN_RATING: u8 = 1;

/// Highest accepted star rating
pub const MAX_RATING: u8 = 5;

/// A persisted testimonial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    pub service: String,
    pub testimonial: String,
    /// Usually "male" or "female"; only presence is validated
    pub gender: String,
    pub rating: u8,
    pub is_active: bool,
    pub order: u32,
    /// Filename only, no upload pipeline behind it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Testimonial {
    /// Apply a partial update the way the store does
    pub fn apply(&mut self, patch: &TestimonialPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(service) = &patch.service {
            self.service = service.clone();
        }
        if let Some(testimonial) = &patch.testimonial {
            self.testimonial = testimonial.clone();
        }
        if let Some(gender) = &patch.gender {
            self.gender = gender.clone();
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
        if let Some(photo) = &patch.photo {
            self.photo = photo.clone();
        }
    }
}

/// Data needed to create a testimonial (the store assigns the id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub service: String,
    pub testimonial: String,
    pub gender: String,
    pub rating: u8,
    pub is_active: bool,
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl NewTestimonial {
    /// Attach a store-assigned id
    pub fn with_id(self, id: TestimonialId) -> Testimonial {
        Testimonial {
            id,
            name: self.name,
            service: self.service,
            testimonial: self.testimonial,
            gender: self.gender,
            rating: self.rating,
            is_active: self.is_active,
            order: self.order,
            photo: self.photo,
        }
    }
}

/// Partial update body. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// `Some(None)` clears the photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Option<String>>,
}

impl TestimonialPatch {
    /// Patch that only moves a record to a new position
    pub fn order(order: u32) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }

    /// Patch that only toggles public visibility
    pub fn active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<NewTestimonial> for TestimonialPatch {
    /// Full replacement of every editable field
    fn from(record: NewTestimonial) -> Self {
        Self {
            name: Some(record.name),
            service: Some(record.service),
            testimonial: Some(record.testimonial),
            gender: Some(record.gender),
            rating: Some(record.rating),
            is_active: Some(record.is_active),
            order: Some(record.order),
            photo: Some(record.photo),
        }
    }
}
