use box_tracker_core::MovingBox;
use chrono::Utc;

use crate::image::ImageSelection;
use crate::sorting::{next_box_number, sort_boxes};
use crate::view_state::{
    Action, EditState, SortDirection, SortKey, SortSpec, Tab, ViewState, reduce,
};

fn make_box(id: i32, number: i32, room: &str, hidden: bool) -> MovingBox {
    MovingBox {
        id,
        number,
        room: room.to_owned(),
        contents: format!("box {id}"),
        image_url: None,
        hidden,
        created_at: Utc::now(),
    }
}

fn rooms(boxes: &[MovingBox]) -> Vec<&str> {
    boxes.iter().map(|b| b.room.as_str()).collect()
}

fn numbers(boxes: &[MovingBox]) -> Vec<i32> {
    boxes.iter().map(|b| b.number).collect()
}

#[test]
fn test_next_box_number() {
    let boxes = vec![make_box(1, 1, "Office", false), make_box(2, 3, "Office", false), make_box(3, 7, "Office", false)];
    assert_eq!(next_box_number(&boxes), 8);
    assert_eq!(next_box_number(&[]), 1);
}

#[test]
fn test_room_sort_is_case_insensitive() {
    let mut boxes = vec![
        make_box(1, 1, "Kitchen", false),
        make_box(2, 2, "attic", false),
        make_box(3, 3, "Bedroom", false),
    ];
    let descending = SortSpec { key: SortKey::Room, direction: SortDirection::Descending };
    sort_boxes(&mut boxes, descending);
    assert_eq!(rooms(&boxes), vec!["Kitchen", "Bedroom", "attic"]);

    sort_boxes(&mut boxes, SortSpec { key: SortKey::Room, direction: SortDirection::Ascending });
    assert_eq!(rooms(&boxes), vec!["attic", "Bedroom", "Kitchen"]);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut boxes = vec![
        make_box(1, 1, "Office", false),
        make_box(2, 2, "office", false),
        make_box(3, 3, "Attic", false),
    ];
    sort_boxes(&mut boxes, SortSpec { key: SortKey::Room, direction: SortDirection::Descending });
    assert_eq!(numbers(&boxes), vec![1, 2, 3]);
}

#[test]
fn test_boxes_loaded_filters_by_tab_and_sorts() {
    let all = vec![
        make_box(1, 5, "Office", false),
        make_box(2, 2, "Garage", true),
        make_box(3, 1, "Kitchen", false),
    ];

    let state = reduce(ViewState::default(), Action::BoxesLoaded(all.clone()));
    assert_eq!(numbers(&state.boxes), vec![1, 5]);
    assert_eq!(state.add_form.number, "6");

    let state = reduce(state, Action::SelectTab(Tab::Unpacked));
    let state = reduce(state, Action::BoxesLoaded(all));
    assert_eq!(numbers(&state.boxes), vec![2]);
    assert_eq!(state.add_form.number, "3");
}

#[test]
fn test_empty_listing_suggests_first_number() {
    let state = reduce(ViewState::default(), Action::BoxesLoaded(Vec::new()));
    assert!(state.boxes.is_empty());
    assert_eq!(state.add_form.number, "1");
}

#[test]
fn test_sort_by_toggles_then_resets() {
    let state = ViewState::default();
    assert_eq!(state.sort, SortSpec { key: SortKey::Number, direction: SortDirection::Ascending });

    let state = reduce(state, Action::SortBy(SortKey::Number));
    assert_eq!(state.sort.direction, SortDirection::Descending);

    let state = reduce(state, Action::SortBy(SortKey::Room));
    assert_eq!(state.sort, SortSpec { key: SortKey::Room, direction: SortDirection::Ascending });
}

#[test]
fn test_second_start_edit_replaces_draft() {
    let first = make_box(1, 1, "Office", false);
    let second = make_box(2, 2, "Garage", false);

    let state = reduce(ViewState::default(), Action::StartEdit(first));
    let state = reduce(state, Action::SetEditContents("changed".to_owned()));
    let state = reduce(state, Action::StartEdit(second));

    match state.edit {
        EditState::Editing { box_id, ref draft } => {
            assert_eq!(box_id, 2);
            assert_eq!(draft.room, "Garage");
            assert_eq!(draft.contents, "box 2");
        },
        EditState::Viewing => panic!("expected editing state"),
    }
}

#[test]
fn test_edit_actions_ignored_while_viewing() {
    let state = reduce(ViewState::default(), Action::SetEditRoom("Attic".to_owned()));
    assert_eq!(state.edit, EditState::Viewing);
}

#[test]
fn test_edit_preview_prefers_new_image() {
    let mut existing = make_box(1, 1, "Office", false);
    existing.image_url = Some("https://img/1.jpg".to_owned());

    let state = reduce(ViewState::default(), Action::StartEdit(existing));
    let EditState::Editing { ref draft, .. } = state.edit else { panic!("expected editing state") };
    assert_eq!(draft.preview().as_deref(), Some("https://img/1.jpg"));

    let image = ImageSelection::new("new.png", b"abc".to_vec()).with_content_type("image/png");
    let state = reduce(state, Action::SelectEditImage(Some(image)));
    let EditState::Editing { ref draft, .. } = state.edit else { panic!("expected editing state") };
    assert_eq!(draft.preview().as_deref(), Some("data:image/png;base64,YWJj"));

    let state = reduce(state, Action::CancelEdit);
    assert_eq!(state.edit, EditState::Viewing);
}

#[test]
fn test_add_completed_keeps_number() {
    let state = reduce(ViewState::default(), Action::SetAddNumber("4".to_owned()));
    let state = reduce(state, Action::SetAddRoom("Office".to_owned()));
    let state = reduce(state, Action::SetAddContents("pens".to_owned()));
    let state = reduce(state, Action::SelectAddImage(Some(ImageSelection::new("a.jpg", vec![1]))));

    let state = reduce(state, Action::AddCompleted);
    assert_eq!(state.add_form.number, "4");
    assert!(state.add_form.room.is_empty());
    assert!(state.add_form.contents.is_empty());
    assert!(state.add_form.image.is_none());
}

#[test]
fn test_add_form_rejects_non_numeric_number() {
    let state = reduce(ViewState::default(), Action::SetAddNumber("four".to_owned()));
    let state = reduce(state, Action::SetAddRoom("Office".to_owned()));
    let state = reduce(state, Action::SetAddContents("pens".to_owned()));
    assert!(state.add_form.to_new_box().is_err());
}
