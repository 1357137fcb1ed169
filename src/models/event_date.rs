use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a single event date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventDateStatus {
    Scheduled,
    OnSale,
    Finished,
    Cancelled,
}

/// A ticket category sold for one event date.
///
/// Prices are decimal strings, as serialized by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketCategory {
    pub id: i64,
    pub event_date_id: i64,
    pub name: String,
    pub price: String,
    pub stock_total: i64,
    pub stock_sold: i64,
    /// `available` / `unavailable`; the backend treats this as open-ended,
    /// so it stays a raw string here.
    pub status: String,
}

impl TicketCategory {
    /// The number of tickets still sellable in this category.
    pub fn stock_remaining(&self) -> i64 {
        (self.stock_total - self.stock_sold).max(0)
    }
}

/// One scheduled date of an event, with its ticket categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDate {
    pub id: i64,
    pub event_id: i64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub status: EventDateStatus,
    /// Absent in listing payloads that do not embed categories.
    #[serde(default)]
    pub ticket_categories: Vec<TicketCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_date_with_categories() {
        let json = r#"{
            "id": 4,
            "event_id": 1,
            "starts_at": "2025-09-20T20:00:00.000000Z",
            "ends_at": null,
            "status": "on_sale",
            "ticket_categories": [
                {
                    "id": 9,
                    "event_date_id": 4,
                    "name": "General",
                    "price": "25.00",
                    "stock_total": 100,
                    "stock_sold": 40,
                    "status": "available"
                }
            ]
        }"#;

        let date: EventDate = serde_json::from_str(json).unwrap();
        assert_eq!(date.status, EventDateStatus::OnSale);
        assert_eq!(date.ticket_categories.len(), 1);
        assert_eq!(date.ticket_categories[0].price, "25.00");
        assert_eq!(date.ticket_categories[0].stock_remaining(), 60);
    }

    #[test]
    fn categories_default_to_empty_when_absent() {
        let json = r#"{
            "id": 4,
            "event_id": 1,
            "starts_at": "2025-09-20T20:00:00.000000Z",
            "ends_at": "2025-09-20T23:00:00.000000Z",
            "status": "scheduled"
        }"#;

        let date: EventDate = serde_json::from_str(json).unwrap();
        assert!(date.ticket_categories.is_empty());
        assert!(date.ends_at.is_some());
    }
}
