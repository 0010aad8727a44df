use chrono::{Local, NaiveDate};

use crate::{
    runtime::handle::{RuntimeError, ShowLogHandle},
    types::ShowIndex,
    view::{ShowCard, maps_search_url},
};

/// Text shown in place of the list when no shows exist.
pub const EMPTY_MESSAGE: &str = "No shows added yet.";

/// List screen controller: renders cards and handles deletes.
#[derive(Clone)]
pub struct ListScreen {
    handle: ShowLogHandle,
}

impl ListScreen {
    /// Binds the screen to the shared collection.
    pub fn new(handle: ShowLogHandle) -> Self {
        Self { handle }
    }

    /// One card per show, in collection order, judged against the local date.
    pub async fn cards(&self) -> Result<Vec<ShowCard>, RuntimeError> {
        self.cards_on(Local::now().date_naive()).await
    }

    /// One card per show, in collection order, judged against `today`.
    pub async fn cards_on(&self, today: NaiveDate) -> Result<Vec<ShowCard>, RuntimeError> {
        let shows = self.handle.list().await?;
        Ok(shows
            .iter()
            .enumerate()
            .map(|(index, rec)| ShowCard::build(index, rec, today))
            .collect())
    }

    /// Deletes the show at `index`; later cards shift down by one.
    pub async fn delete(&self, index: ShowIndex) -> Result<(), RuntimeError> {
        self.handle.remove_at(index).await
    }

    /// Map-search link for the venue of the show at `index`.
    pub async fn maps_url(&self, index: ShowIndex) -> Result<Option<String>, RuntimeError> {
        let rec = self.handle.get(index).await?;
        Ok(rec.map(|r| maps_search_url(r.venue_address())))
    }
}
