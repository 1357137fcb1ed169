use http::Method;

use crate::error::Result;
use crate::http::auth::AuthApiClient;
use crate::models::common::Paginated;
use crate::models::order::Order;

/// Buyer-facing order endpoints. All calls carry the session's bearer
/// token; without one the server answers 401 and the error propagates.
#[derive(Clone)]
pub struct OrdersService {
    api: AuthApiClient,
}

impl OrdersService {
    /// Creates a new `OrdersService`.
    pub fn new(api: AuthApiClient) -> Self {
        Self { api }
    }

    /// Lists the current user's orders, one page at a time.
    pub async fn list(&self, page: u32) -> Result<Paginated<Order>> {
        self.api
            .execute(
                self.api
                    .request(Method::GET, "/orders")
                    .query(&[("page", page)]),
            )
            .await
    }

    /// Fetches one of the current user's orders, with items and tickets.
    pub async fn get(&self, id: i64) -> Result<Order> {
        self.api.get(&format!("/orders/{}", id)).await
    }
}
