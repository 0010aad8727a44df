use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    runtime::handle::{RuntimeError, ShowLogHandle},
    show::{ShowDraft, ValidationError},
    types::ShowIndex,
};

use super::picker::{BannerPick, BannerPicker, PickError};

/// Failure of [`ShowForm::submit`].
#[derive(Debug, Error)]
pub enum FormError {
    /// The draft is incomplete; nothing was sent to the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The store call failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Which store operation a form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Appends a new show.
    Create,
    /// Replaces the show at `index`.
    Edit {
        /// Target index captured when the form was opened.
        index: ShowIndex,
    },
}

/// Successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// A new show was appended at `index`.
    Created {
        /// Index of the new show.
        index: ShowIndex,
    },
    /// The show at `index` was replaced.
    Updated {
        /// Index of the replaced show.
        index: ShowIndex,
    },
}

/// Form state and submit logic shared by the create and edit screens.
pub struct ShowForm {
    handle: ShowLogHandle,
    mode: FormMode,
    draft: ShowDraft,
}

impl ShowForm {
    /// Opens an empty create form.
    pub fn create(handle: ShowLogHandle) -> Self {
        Self {
            handle,
            mode: FormMode::Create,
            draft: ShowDraft::default(),
        }
    }

    /// Opens an edit form pre-filled from the show at `index`.
    ///
    /// When `index` no longer exists the fields start empty; the form still targets `index`.
    pub async fn edit(handle: ShowLogHandle, index: ShowIndex) -> Result<Self, RuntimeError> {
        let draft = handle
            .get(index)
            .await?
            .map(|rec| rec.to_draft())
            .unwrap_or_default();

        Ok(Self {
            handle,
            mode: FormMode::Edit { index },
            draft,
        })
    }

    /// Operation this form submits to.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Current field values.
    pub fn draft(&self) -> &ShowDraft {
        &self.draft
    }

    /// Mutable access for field edits.
    pub fn draft_mut(&mut self) -> &mut ShowDraft {
        &mut self.draft
    }

    /// Runs the picker and stores the chosen banner.
    ///
    /// Cancellation and failure both keep the previous banner.
    pub async fn choose_banner<P: BannerPicker>(
        &mut self,
        picker: &mut P,
    ) -> Result<(), PickError> {
        match picker.pick().await? {
            BannerPick::Selected(uri) => {
                debug!(%uri, "banner selected");
                self.draft.banner_image_ref = uri;
            }
            BannerPick::Canceled => debug!("banner selection canceled"),
        }
        Ok(())
    }

    /// Validates the draft and submits it.
    ///
    /// An incomplete draft returns [`FormError::Validation`] without touching the store.
    pub async fn submit(&self) -> Result<Submitted, FormError> {
        let record = self.draft.clone().validate().inspect_err(|err| {
            warn!(missing = %err, "show submission rejected");
        })?;

        match self.mode {
            FormMode::Create => {
                let index = self.handle.add(record).await?;
                Ok(Submitted::Created { index })
            }
            FormMode::Edit { index } => {
                self.handle.replace_at(index, record).await?;
                Ok(Submitted::Updated { index })
            }
        }
    }
}
