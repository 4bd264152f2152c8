//! Testimonial form and validation
//!
//! The form holds raw user input. Validation turns it into a typed
//! `NewTestimonial` or a list of per-field messages.

use serde::Serialize;

use super::testimonial::{NewTestimonial, Testimonial, TestimonialPatch, MAX_RATING, MIN_RATING};

/// Default rating for a blank form
const DEFAULT_RATING: i64 = MAX_RATING as i64;

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Service,
    Testimonial,
    Gender,
    Rating,
    IsActive,
    Order,
    Photo,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Service => write!(f, "service"),
            Field::Testimonial => write!(f, "testimonial"),
            Field::Gender => write!(f, "gender"),
            Field::Rating => write!(f, "rating"),
            Field::IsActive => write!(f, "isActive"),
            Field::Order => write!(f, "order"),
            Field::Photo => write!(f, "photo"),
        }
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "service" => Ok(Field::Service),
            "testimonial" | "text" => Ok(Field::Testimonial),
            "gender" => Ok(Field::Gender),
            "rating" => Ok(Field::Rating),
            "isactive" | "active" | "is_active" => Ok(Field::IsActive),
            "order" => Ok(Field::Order),
            "photo" => Ok(Field::Photo),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

/// A single field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// All validation messages for one submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for a field, if it failed
    pub fn field(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

fn check_text(errors: &mut ValidationErrors, field: Field, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{} is required", label));
    }
}

fn check_rating(errors: &mut ValidationErrors, rating: i64) {
    if rating < MIN_RATING as i64 || rating > MAX_RATING as i64 {
        errors.push(
            Field::Rating,
            format!("Rating must be between {} and {}", MIN_RATING, MAX_RATING),
        );
    }
}

fn check_order(errors: &mut ValidationErrors, order: i64) {
    if order < 0 {
        errors.push(Field::Order, "Order must be 0 or greater");
    } else if order > u32::MAX as i64 {
        errors.push(Field::Order, "Order is too large");
    }
}

/// Raw values behind the create/edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialForm {
    pub name: String,
    pub service: String,
    pub testimonial: String,
    pub gender: String,
    pub rating: i64,
    pub is_active: bool,
    pub order: i64,
    pub photo: Option<String>,
}

impl TestimonialForm {
    /// Blank defaults for a new record placed at `order`
    pub fn blank(order: usize) -> Self {
        Self {
            name: String::new(),
            service: String::new(),
            testimonial: String::new(),
            gender: String::new(),
            rating: DEFAULT_RATING,
            is_active: true,
            order: order as i64,
            photo: None,
        }
    }

    /// Form pre-filled with an existing record
    pub fn from_record(record: &Testimonial) -> Self {
        Self {
            name: record.name.clone(),
            service: record.service.clone(),
            testimonial: record.testimonial.clone(),
            gender: record.gender.clone(),
            rating: record.rating as i64,
            is_active: record.is_active,
            order: record.order as i64,
            photo: record.photo.clone(),
        }
    }

    /// Whether the primary text fields differ from `record`
    pub fn has_unsaved_changes(&self, record: &Testimonial) -> bool {
        self.name != record.name
            || self.service != record.service
            || self.testimonial != record.testimonial
    }

    /// Set a field from textual input
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Service => self.service = value.to_string(),
            Field::Testimonial => self.testimonial = value.to_string(),
            Field::Gender => self.gender = value.trim().to_lowercase(),
            Field::Rating => match value.trim().parse() {
                Ok(rating) => self.rating = rating,
                Err(_) => errors.push(Field::Rating, "Rating must be a whole number"),
            },
            Field::Order => match value.trim().parse() {
                Ok(order) => self.order = order,
                Err(_) => errors.push(Field::Order, "Order must be a whole number"),
            },
            Field::IsActive => match value.trim().to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => self.is_active = true,
                "false" | "no" | "off" | "0" => self.is_active = false,
                _ => errors.push(Field::IsActive, "Active must be true or false"),
            },
            Field::Photo => {
                let value = value.trim();
                self.photo = if value.is_empty() || value == "none" {
                    None
                } else {
                    Some(value.to_string())
                };
            }
        }
        errors.into_result()
    }

    /// Check every rule and build the typed record
    pub fn validate(&self) -> Result<NewTestimonial, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_text(&mut errors, Field::Name, &self.name, "Name");
        check_text(&mut errors, Field::Service, &self.service, "Service");
        check_text(&mut errors, Field::Testimonial, &self.testimonial, "Testimonial");
        check_text(&mut errors, Field::Gender, &self.gender, "Gender");
        check_rating(&mut errors, self.rating);
        check_order(&mut errors, self.order);
        errors.into_result()?;

        Ok(NewTestimonial {
            name: self.name.clone(),
            service: self.service.clone(),
            testimonial: self.testimonial.clone(),
            gender: self.gender.clone(),
            rating: self.rating as u8,
            is_active: self.is_active,
            order: self.order as u32,
            photo: self.photo.clone(),
        })
    }
}

impl NewTestimonial {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_text(&mut errors, Field::Name, &self.name, "Name");
        check_text(&mut errors, Field::Service, &self.service, "Service");
        check_text(&mut errors, Field::Testimonial, &self.testimonial, "Testimonial");
        check_text(&mut errors, Field::Gender, &self.gender, "Gender");
        check_rating(&mut errors, self.rating as i64);
        errors.into_result()
    }
}

impl TestimonialPatch {
    /// Validate only the fields the patch carries
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Some(name) = &self.name {
            check_text(&mut errors, Field::Name, name, "Name");
        }
        if let Some(service) = &self.service {
            check_text(&mut errors, Field::Service, service, "Service");
        }
        if let Some(testimonial) = &self.testimonial {
            check_text(&mut errors, Field::Testimonial, testimonial, "Testimonial");
        }
        if let Some(gender) = &self.gender {
            check_text(&mut errors, Field::Gender, gender, "Gender");
        }
        if let Some(rating) = self.rating {
            check_rating(&mut errors, rating as i64);
        }
        errors.into_result()
    }
}
