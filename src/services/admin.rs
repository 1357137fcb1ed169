use http::Method;

use crate::error::Result;
use crate::http::auth::AuthApiClient;
use crate::models::common::Paginated;
use crate::models::discount::DiscountCode;
use crate::models::event::{AdminEvent, AdminEventItem};
use crate::models::event_date::EventDate;
use crate::models::order::{AdminOrder, AdminOrderDetail};
use crate::models::stats::{DashboardStats, EventStats};
use crate::models::user::User;

/// Administration endpoints: event management, orders, stats, discount
/// codes, and user administration.
///
/// Access control lives server-side; pair these calls with the role guards
/// when wiring navigation.
#[derive(Clone)]
pub struct AdminService {
    api: AuthApiClient,
}

impl AdminService {
    /// Creates a new `AdminService`.
    pub fn new(api: AuthApiClient) -> Self {
        Self { api }
    }

    /// Fetches the dashboard headline numbers.
    pub async fn dashboard(&self) -> Result<DashboardStats> {
        self.api.get("/admin/dashboard").await
    }

    /// Lists events for administration, one page at a time.
    pub async fn events(&self, page: u32) -> Result<Paginated<AdminEventItem>> {
        self.api
            .execute(
                self.api
                    .request(Method::GET, "/admin/events")
                    .query(&[("page", page)]),
            )
            .await
    }

    /// Fetches the admin view of one event.
    pub async fn event(&self, id: i64) -> Result<AdminEvent> {
        self.api.get(&format!("/admin/events/{}", id)).await
    }

    /// Fetches the sales statistics for one event.
    pub async fn event_stats(&self, id: i64) -> Result<EventStats> {
        self.api.get(&format!("/admin/events/{}/stats", id)).await
    }

    /// Lists the dates of one event, with their ticket categories.
    pub async fn event_dates(&self, event_id: i64) -> Result<Vec<EventDate>> {
        self.api
            .get(&format!("/admin/events/{}/dates", event_id))
            .await
    }

    /// Lists orders across all buyers, one page at a time.
    pub async fn orders(&self, page: u32) -> Result<Paginated<AdminOrder>> {
        self.api
            .execute(
                self.api
                    .request(Method::GET, "/admin/orders")
                    .query(&[("page", page)]),
            )
            .await
    }

    /// Fetches the full admin view of one order.
    pub async fn order(&self, id: i64) -> Result<AdminOrderDetail> {
        self.api.get(&format!("/admin/orders/{}", id)).await
    }

    /// Lists all discount codes.
    pub async fn discount_codes(&self) -> Result<Vec<DiscountCode>> {
        self.api.get("/admin/discount-codes").await
    }

    /// Lists platform users, one page at a time.
    pub async fn users(&self, page: u32) -> Result<Paginated<User>> {
        self.api
            .execute(
                self.api
                    .request(Method::GET, "/admin/users")
                    .query(&[("page", page)]),
            )
            .await
    }
}
