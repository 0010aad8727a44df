use std::future::Future;

use thiserror::Error;

/// Resolved outcome of one banner selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerPick {
    /// The user chose an image; holds its local path or URI.
    Selected(String),
    /// The user dismissed the picker.
    Canceled,
}

/// Banner selection failed before the user could choose.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    /// The platform denied access to the image library.
    #[error("image library access denied")]
    PermissionDenied,
    /// Any other picker failure.
    #[error("image picker failed: {0}")]
    Failed(String),
}

/// Platform image picker.
///
/// The form controller only ever sees the resolved value, never a pending state.
pub trait BannerPicker {
    /// Opens the picker and resolves once the user selects or cancels.
    fn pick(&mut self) -> impl Future<Output = Result<BannerPick, PickError>> + Send;
}
