//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the local cache.

pub mod cache;
pub mod dialog;
pub mod editor;
pub mod reorder;
pub mod testimonial_service;

pub use cache::{CacheKey, TestimonialCache};
pub use dialog::{CloseOutcome, DialogMode, DialogState};
pub use editor::TestimonialEditor;
pub use reorder::{move_item, plan_reorder, DragDrop};
pub use testimonial_service::{ReorderOutcome, TestimonialService};
