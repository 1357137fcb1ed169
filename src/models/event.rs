use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::event_date::EventDate;
use crate::models::user::User;

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Upcoming,
    OnSale,
    SoldOut,
    Cancelled,
    Finished,
}

/// An event as shown in the public catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicEvent {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<EventStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The full public view of a single event, with its dates and categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicEventDetail {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_path: Option<String>,
    pub location: Option<String>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub dates: Vec<EventDate>,
}

/// A row in the admin event listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminEventItem {
    pub id: i64,
    pub title: String,
    pub status: EventStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The admin view of an event, including audit fields and the creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminEvent {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: EventStatus,
    #[serde(default)]
    pub image_path: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    /// The full profile of the user who created the event.
    pub creator: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;

    #[test]
    fn event_status_uses_snake_case() {
        assert_eq!(
            serde_json::from_str::<EventStatus>(r#""on_sale""#).unwrap(),
            EventStatus::OnSale
        );
        assert_eq!(
            serde_json::from_str::<EventStatus>(r#""sold_out""#).unwrap(),
            EventStatus::SoldOut
        );
    }

    #[test]
    fn admin_event_decodes_with_creator() {
        let json = r#"{
            "id": 3,
            "title": "Festival de Jazz",
            "description": "Tres noches de jazz",
            "location": "Teatro Principal",
            "status": "on_sale",
            "image_path": null,
            "created_by": 2,
            "created_at": "2025-01-10T09:00:00.000000Z",
            "updated_at": "2025-01-15T12:00:00.000000Z",
            "deleted_at": null,
            "creator": {
                "id": 2,
                "name": "Gestor Uno",
                "email": "gestor@example.com",
                "email_verified_at": "2024-12-01T00:00:00.000000Z",
                "role": "gestor",
                "is_active": true,
                "created_at": "2024-11-01T00:00:00.000000Z",
                "updated_at": "2024-12-01T00:00:00.000000Z"
            }
        }"#;

        let event: AdminEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.status, EventStatus::OnSale);
        assert_eq!(event.creator.role, Role::Gestor);
        assert!(event.deleted_at.is_none());
    }

    #[test]
    fn public_event_tolerates_sparse_listing_rows() {
        let json = r#"{"id": 1, "title": "Concierto"}"#;
        let event: PublicEvent = serde_json::from_str(json).unwrap();
        assert!(event.status.is_none());
        assert!(event.location.is_none());
    }
}
