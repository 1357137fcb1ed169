use http::Method;

use crate::error::Result;
use crate::http::client::ApiClient;
use crate::models::common::Paginated;
use crate::models::event::{PublicEvent, PublicEventDetail};

/// Public event catalog endpoints. No authentication required.
#[derive(Clone)]
pub struct EventsService {
    api: ApiClient,
}

impl EventsService {
    /// Creates a new `EventsService`.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Lists published events, one page at a time.
    pub async fn list(&self, page: u32) -> Result<Paginated<PublicEvent>> {
        self.api
            .execute(
                self.api
                    .request(Method::GET, "/events")
                    .query(&[("page", page)]),
            )
            .await
    }

    /// Fetches the full public view of one event, with dates and categories.
    pub async fn get(&self, id: i64) -> Result<PublicEventDetail> {
        self.api.get(&format!("/events/{}", id)).await
    }
}
