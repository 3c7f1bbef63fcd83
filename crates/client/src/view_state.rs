//! View state and the pure reducer that transitions it.

use box_tracker_core::{BoxUpdate, MovingBox, NewBox};

use crate::error::ClientError;
use crate::image::ImageSelection;
use crate::sorting::{apply_view, next_box_number};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Boxes still packed (`hidden == false`).
    #[default]
    Packed,
    /// Boxes already unpacked (`hidden == true`).
    Unpacked,
}

impl Tab {
    #[must_use]
    pub const fn shows(self, b: &MovingBox) -> bool {
        match self {
            Self::Packed => !b.hidden,
            Self::Unpacked => b.hidden,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Number,
    Room,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Clicking the active column flips direction; a new column starts ascending.
    #[must_use]
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self { key, direction: self.direction.toggled() }
        } else {
            Self { key, direction: SortDirection::Ascending }
        }
    }
}

/// Raw text of the "add box" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub number: String,
    pub room: String,
    pub contents: String,
    pub image: Option<ImageSelection>,
}

impl AddForm {
    /// Build the create request, minus any image URL.
    pub fn to_new_box(&self) -> Result<NewBox, ClientError> {
        if self.number.trim().is_empty()
            || self.room.trim().is_empty()
            || self.contents.trim().is_empty()
        {
            return Err(ClientError::Validation(
                "Please fill in box number, room, and contents".to_owned(),
            ));
        }
        let number = self.number.trim().parse::<i32>().map_err(|_| {
            ClientError::Validation(format!("Box number must be a whole number, got {:?}", self.number))
        })?;
        Ok(NewBox::new(number, self.room.clone(), self.contents.clone()))
    }
}

/// In-progress edit of one box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub room: String,
    pub contents: String,
    pub current_image_url: Option<String>,
    pub new_image: Option<ImageSelection>,
}

impl EditDraft {
    #[must_use]
    pub fn from_box(b: &MovingBox) -> Self {
        Self {
            room: b.room.clone(),
            contents: b.contents.clone(),
            current_image_url: b.image_url.clone(),
            new_image: None,
        }
    }

    /// What the edit row should display as the photo.
    #[must_use]
    pub fn preview(&self) -> Option<String> {
        self.new_image
            .as_ref()
            .map(ImageSelection::preview_data_url)
            .or_else(|| self.current_image_url.clone())
    }

    /// Build the update, with `image_url` taken from the current photo.
    pub fn to_update(&self) -> Result<BoxUpdate, ClientError> {
        if self.room.trim().is_empty() || self.contents.trim().is_empty() {
            return Err(ClientError::Validation("Please fill in room and contents".to_owned()));
        }
        Ok(BoxUpdate {
            room: self.room.clone(),
            contents: self.contents.clone(),
            image_url: self.current_image_url.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { box_id: i32, draft: EditDraft },
}

impl EditState {
    #[must_use]
    pub const fn editing_id(&self) -> Option<i32> {
        match *self {
            Self::Viewing => None,
            Self::Editing { box_id, .. } => Some(box_id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Boxes on the active tab, in display order.
    pub boxes: Vec<MovingBox>,
    pub add_form: AddForm,
    pub edit: EditState,
    pub tab: Tab,
    pub sort: SortSpec,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Full server listing, unfiltered.
    BoxesLoaded(Vec<MovingBox>),
    SetAddNumber(String),
    SetAddRoom(String),
    SetAddContents(String),
    SelectAddImage(Option<ImageSelection>),
    AddCompleted,
    StartEdit(MovingBox),
    SetEditRoom(String),
    SetEditContents(String),
    SelectEditImage(Option<ImageSelection>),
    CancelEdit,
    EditCompleted,
    SelectTab(Tab),
    SortBy(SortKey),
    SetLoading(bool),
}

#[must_use]
pub fn reduce(mut state: ViewState, action: Action) -> ViewState {
    match action {
        Action::BoxesLoaded(all) => {
            state.boxes = apply_view(all, state.tab, state.sort);
            state.add_form.number = next_box_number(&state.boxes).to_string();
        },
        Action::SetAddNumber(number) => state.add_form.number = number,
        Action::SetAddRoom(room) => state.add_form.room = room,
        Action::SetAddContents(contents) => state.add_form.contents = contents,
        Action::SelectAddImage(image) => state.add_form.image = image,
        Action::AddCompleted => {
            state.add_form = AddForm { number: state.add_form.number, ..AddForm::default() };
        },
        Action::StartEdit(b) => {
            state.edit = EditState::Editing { box_id: b.id, draft: EditDraft::from_box(&b) };
        },
        Action::SetEditRoom(room) => {
            if let EditState::Editing { ref mut draft, .. } = state.edit {
                draft.room = room;
            }
        },
        Action::SetEditContents(contents) => {
            if let EditState::Editing { ref mut draft, .. } = state.edit {
                draft.contents = contents;
            }
        },
        Action::SelectEditImage(image) => {
            if let EditState::Editing { ref mut draft, .. } = state.edit {
                draft.new_image = image;
            }
        },
        Action::CancelEdit | Action::EditCompleted => state.edit = EditState::Viewing,
        Action::SelectTab(tab) => state.tab = tab,
        Action::SortBy(key) => state.sort = state.sort.select(key),
        Action::SetLoading(loading) => state.loading = loading,
    }
    state
}
