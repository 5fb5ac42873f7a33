use thiserror::Error;

/// Why a view ended up in [`ViewState::Failed`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("missing route parameter `{0}`")]
    MissingRouteParam(&'static str),

    #[error(transparent)]
    Service(#[from] api::Error),
}

/// Something a view lists; decides between the empty and populated states.
pub trait Listing {
    fn is_empty(&self) -> bool;
}

impl<T> Listing for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

/// `Loading -> {Empty | Populated | Failed}`; every state but `Loading` is final
/// for the lifetime of a mount.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Empty(T),
    Populated(T),
    Failed(ViewError),
}

impl<T: Listing> ViewState<T> {
    /// Settle a finished load. Failures are logged here so callers only render.
    pub fn settle(view: &str, result: Result<T, ViewError>) -> Self {
        match result {
            Ok(listing) if listing.is_empty() => ViewState::Empty(listing),
            Ok(listing) => ViewState::Populated(listing),
            Err(err) => {
                tracing::warn!("{view}: load failed: {err}");
                ViewState::Failed(err)
            }
        }
    }
}
