//! Async orchestration of user intents over [`reduce`].

use box_tracker_core::NewBox;

use crate::api::BoxApi;
use crate::error::ClientError;
use crate::image::ImageSelection;
use crate::notifier::Notifier;
use crate::upload::ImageUploader;
use crate::view_state::{Action, EditState, SortKey, Tab, ViewState, reduce};

const ADD_FAILED: &str = "Failed to add box";
const UPDATE_FAILED: &str = "Failed to update box";
const TOGGLE_FAILED: &str = "Failed to update box visibility";
const DELETE_FAILED: &str = "Failed to delete box";
const DELETE_CONFIRM: &str = "Are you sure you want to delete this box?";

pub struct Controller<A, U, N> {
    api: A,
    uploader: U,
    notifier: N,
    state: ViewState,
}

impl<A: BoxApi, U: ImageUploader, N: Notifier> Controller<A, U, N> {
    pub fn new(api: A, uploader: U, notifier: N) -> Self {
        Self { api, uploader, notifier, state: ViewState::default() }
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    /// Reload every box and re-apply the tab filter and sort.
    ///
    /// A failed fetch empties the list.
    pub async fn refresh(&mut self) {
        let boxes = match self.api.list_boxes(true).await {
            Ok(boxes) => boxes,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching boxes");
                Vec::new()
            },
        };
        self.dispatch(Action::BoxesLoaded(boxes));
    }

    pub async fn select_tab(&mut self, tab: Tab) {
        self.dispatch(Action::SelectTab(tab));
        self.refresh().await;
    }

    pub async fn sort_by(&mut self, key: SortKey) {
        self.dispatch(Action::SortBy(key));
        self.refresh().await;
    }

    pub async fn add_box(&mut self) -> Result<(), ClientError> {
        if self.is_busy() {
            return Ok(());
        }
        let input = match self.state.add_form.to_new_box() {
            Ok(input) => input,
            Err(e) => return Err(self.reject(e)),
        };
        let image = self.state.add_form.image.clone();

        self.dispatch(Action::SetLoading(true));
        let result = self.submit_add(input, image).await;
        self.finish(result, ADD_FAILED)
    }

    pub fn start_edit(&mut self, id: i32) {
        if let Some(b) = self.state.boxes.iter().find(|b| b.id == id).cloned() {
            self.dispatch(Action::StartEdit(b));
        }
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(Action::CancelEdit);
    }

    pub async fn save_edit(&mut self) -> Result<(), ClientError> {
        if self.is_busy() {
            return Ok(());
        }
        let EditState::Editing { box_id, ref draft } = self.state.edit else {
            return Ok(());
        };
        let update = match draft.to_update() {
            Ok(update) => update,
            Err(e) => return Err(self.reject(e)),
        };
        let new_image = draft.new_image.clone();

        self.dispatch(Action::SetLoading(true));
        let result = async {
            let mut update = update;
            if let Some(image) = new_image {
                update.image_url = self.upload_or_skip(&image).await;
            }
            self.api.update_box(box_id, &update).await?;
            self.dispatch(Action::EditCompleted);
            self.refresh().await;
            Ok::<(), ClientError>(())
        }
        .await;
        self.finish(result, UPDATE_FAILED)
    }

    /// Flip `hidden` for one box.
    pub async fn toggle_hidden(&mut self, id: i32, currently_hidden: bool) -> Result<(), ClientError> {
        if self.is_busy() {
            return Ok(());
        }
        self.dispatch(Action::SetLoading(true));
        let result = async {
            self.api.set_hidden(id, !currently_hidden).await?;
            self.refresh().await;
            Ok::<(), ClientError>(())
        }
        .await;
        self.finish(result, TOGGLE_FAILED)
    }

    /// Delete after the user confirms. Declining is not an error.
    pub async fn delete_box(&mut self, id: i32) -> Result<(), ClientError> {
        if self.is_busy() || !self.notifier.confirm(DELETE_CONFIRM) {
            return Ok(());
        }
        self.dispatch(Action::SetLoading(true));
        let result = async {
            self.api.delete_box(id).await?;
            self.refresh().await;
            Ok::<(), ClientError>(())
        }
        .await;
        self.finish(result, DELETE_FAILED)
    }

    async fn submit_add(
        &mut self,
        mut input: NewBox,
        image: Option<ImageSelection>,
    ) -> Result<(), ClientError> {
        if let Some(image) = image {
            input.image_url = self.upload_or_skip(&image).await;
        }
        self.api.create_box(&input).await?;
        self.dispatch(Action::AddCompleted);
        self.refresh().await;
        Ok(())
    }

    /// A failed upload does not block the mutation; the box is saved without a photo.
    async fn upload_or_skip(&self, image: &ImageSelection) -> Option<String> {
        match self.uploader.upload(image).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(error = %e, file = %image.file_name, "Error uploading image");
                None
            },
        }
    }

    fn is_busy(&self) -> bool {
        if self.state.loading {
            tracing::debug!("mutation already in flight, ignoring");
        }
        self.state.loading
    }

    fn reject(&self, err: ClientError) -> ClientError {
        self.notifier.alert(&err.to_string());
        err
    }

    fn finish(&mut self, result: Result<(), ClientError>, message: &str) -> Result<(), ClientError> {
        if let Err(ref e) = result {
            tracing::error!(error = %e, "{message}");
            self.notifier.alert(message);
        }
        self.dispatch(Action::SetLoading(false));
        result
    }
}
