use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::UserSummary;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    PendingPayment,
    Paid,
    Cancelled,
}

/// An issued ticket belonging to an order item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub order_item_id: i64,
    pub ticket_category_id: i64,
    /// The ticket's unique human-readable code.
    pub code: String,
    /// The payload encoded into the entry QR, when generated.
    pub qr_payload: Option<String>,
    pub status: String,
    pub issued_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

/// The event context the backend nests under an order item's category.
///
/// Admin and buyer endpoints embed the same `ticket_category -> event_date
/// -> event` chain with varying field subsets; optional fields cover the
/// narrower listing payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryContext {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    pub event_date: DateContext,
}

/// The event date nested inside [`CategoryContext`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateContext {
    pub starts_at: DateTime<Utc>,
    pub event: EventContext,
}

/// The event nested inside [`DateContext`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
}

/// A line item of a buyer order. Monetary amounts are decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub ticket_category_id: i64,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub event_date_id: i64,
    /// Category name frozen at purchase time.
    pub ticket_category_name_snapshot: String,
    #[serde(default)]
    pub ticket_category: Option<CategoryContext>,
    /// Present only in the order detail payload.
    #[serde(default)]
    pub tickets: Option<Vec<Ticket>>,
}

/// A buyer's order, as returned by the buyer order endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub status: OrderStatus,
    pub subtotal: String,
    pub discount_total: String,
    pub tax_total: String,
    pub total: String,
    pub currency: String,
    pub stripe_session_id: Option<String>,
    pub stripe_payment_intent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// A payment record attached to an admin order detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub provider: String,
    pub environment: Option<String>,
    pub stripe_payment_intent_id: Option<String>,
    pub status: String,
    pub amount: String,
    pub currency: String,
    pub paid_at: Option<DateTime<Utc>>,
}

/// A row in the admin order listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminOrder {
    pub id: i64,
    pub user_id: i64,
    pub status: OrderStatus,
    pub total: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub user: UserSummary,
    #[serde(default)]
    pub items: Vec<AdminOrderItem>,
}

/// A line item in the admin order listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminOrderItem {
    pub id: i64,
    pub order_id: i64,
    pub ticket_category_id: i64,
    pub quantity: u32,
    pub line_total: String,
    #[serde(default)]
    pub ticket_category: Option<CategoryContext>,
}

/// The full admin view of one order, with buyer, payment, and tickets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminOrderDetail {
    pub id: i64,
    pub user_id: i64,
    pub status: OrderStatus,
    pub subtotal: String,
    pub discount_total: String,
    pub tax_total: String,
    pub total: String,
    pub currency: String,
    pub stripe_session_id: Option<String>,
    pub stripe_payment_intent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserSummary,
    pub payment: Option<Payment>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_uses_snake_case() {
        assert_eq!(
            serde_json::from_str::<OrderStatus>(r#""pending_payment""#).unwrap(),
            OrderStatus::PendingPayment
        );
    }

    #[test]
    fn admin_order_decodes_with_nested_event_context() {
        let json = r#"{
            "id": 21,
            "user_id": 5,
            "status": "paid",
            "total": "80.00",
            "currency": "EUR",
            "created_at": "2025-02-01T18:00:00.000000Z",
            "user": {"id": 5, "name": "Comprador", "email": "buyer@example.com"},
            "items": [
                {
                    "id": 31,
                    "order_id": 21,
                    "ticket_category_id": 9,
                    "quantity": 2,
                    "line_total": "80.00",
                    "ticket_category": {
                        "event_date": {
                            "starts_at": "2025-09-20T20:00:00.000000Z",
                            "event": {"title": "Festival de Jazz"}
                        }
                    }
                }
            ]
        }"#;

        let order: AdminOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Paid);
        let context = order.items[0].ticket_category.as_ref().unwrap();
        assert_eq!(context.event_date.event.title, "Festival de Jazz");
        assert!(context.name.is_none());
    }

    #[test]
    fn buyer_order_detail_decodes_tickets() {
        let json = r#"{
            "id": 21,
            "user_id": 5,
            "status": "paid",
            "subtotal": "80.00",
            "discount_total": "0.00",
            "tax_total": "0.00",
            "total": "80.00",
            "currency": "EUR",
            "stripe_session_id": null,
            "stripe_payment_intent": "pi_123",
            "created_at": "2025-02-01T18:00:00.000000Z",
            "updated_at": "2025-02-01T18:05:00.000000Z",
            "items": [
                {
                    "id": 31,
                    "order_id": 21,
                    "ticket_category_id": 9,
                    "quantity": 1,
                    "unit_price": "40.00",
                    "line_total": "40.00",
                    "event_date_id": 4,
                    "ticket_category_name_snapshot": "General",
                    "tickets": [
                        {
                            "id": 51,
                            "order_item_id": 31,
                            "ticket_category_id": 9,
                            "code": "TCK-0001",
                            "qr_payload": null,
                            "status": "issued",
                            "issued_at": "2025-02-01T18:05:00.000000Z",
                            "used_at": null
                        }
                    ]
                }
            ]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        let tickets = order.items[0].tickets.as_ref().unwrap();
        assert_eq!(tickets[0].code, "TCK-0001");
        assert!(tickets[0].used_at.is_none());
    }
}
