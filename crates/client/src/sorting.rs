//! Tab filtering, column sorting and the next-number suggestion.

use std::cmp::Ordering;

use box_tracker_core::{FIRST_BOX_NUMBER, MovingBox};

use crate::view_state::{SortDirection, SortKey, SortSpec, Tab};

/// One past the highest number in `boxes`, or [`FIRST_BOX_NUMBER`] when empty.
///
/// Advisory only; the server does not enforce unique numbers.
#[must_use]
pub fn next_box_number(boxes: &[MovingBox]) -> i32 {
    boxes.iter().map(|b| b.number).max().map_or(FIRST_BOX_NUMBER, |n| n.saturating_add(1))
}

/// Stable sort; equal keys keep their input order in both directions.
pub fn sort_boxes(boxes: &mut [MovingBox], sort: SortSpec) {
    boxes.sort_by(|a, b| {
        let ord = compare(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Keep the boxes belonging to `tab`, then sort them.
#[must_use]
pub fn apply_view(boxes: Vec<MovingBox>, tab: Tab, sort: SortSpec) -> Vec<MovingBox> {
    let mut visible: Vec<MovingBox> = boxes.into_iter().filter(|b| tab.shows(b)).collect();
    sort_boxes(&mut visible, sort);
    visible
}

fn compare(a: &MovingBox, b: &MovingBox, key: SortKey) -> Ordering {
    match key {
        SortKey::Number => a.number.cmp(&b.number),
        SortKey::Room => a.room.to_lowercase().cmp(&b.room.to_lowercase()),
    }
}
