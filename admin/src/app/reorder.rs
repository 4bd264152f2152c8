//! Drag-to-reorder planning
//!
//! Pure functions: given the displayed sequence and a drop, work out the new
//! sequence with every record renumbered to its position.

use crate::domain::entities::{Testimonial, TestimonialId};

/// Move the element at `from` so it ends up at `to`.
///
/// Items between the two indices shift by one toward the vacated slot.
/// Out-of-range indices leave the slice untouched.
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }
}

/// A drag gesture that ended over the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragDrop {
    pub dragged: TestimonialId,
    /// Item under the pointer, `None` when released outside any target
    pub over: Option<TestimonialId>,
}

impl DragDrop {
    pub fn new(dragged: TestimonialId, over: Option<TestimonialId>) -> Self {
        Self { dragged, over }
    }
}

/// Compute the reordered sequence for a drop.
///
/// Returns `None` when the drop changes nothing: released outside, dropped
/// onto itself, or either id is not in `sequence`. Otherwise every record in
/// the result has `order` set to its zero-based index.
pub fn plan_reorder(sequence: &[Testimonial], gesture: DragDrop) -> Option<Vec<Testimonial>> {
    let over = gesture.over?;
    if over == gesture.dragged {
        return None;
    }
    let from = sequence.iter().position(|t| t.id == gesture.dragged)?;
    let to = sequence.iter().position(|t| t.id == over)?;

    let mut reordered = sequence.to_vec();
    move_item(&mut reordered, from, to);
    for (position, record) in reordered.iter_mut().enumerate() {
        record.order = position as u32;
    }
    Some(reordered)
}
