//! Display metadata (label and badge color) for the platform's status
//! enumerations, with graceful fallbacks for raw values the UI receives
//! before they are parsed.

use std::borrow::Cow;

use crate::models::event::EventStatus;
use crate::models::event_date::EventDateStatus;
use crate::models::order::OrderStatus;

/// Label and badge color for a status value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMeta {
    /// Human-readable label.
    pub label: Cow<'static, str>,
    /// UI badge color name.
    pub color: &'static str,
}

impl StatusMeta {
    const fn fixed(label: &'static str, color: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            color,
        }
    }
}

/// Metadata for an unknown or absent status.
fn unknown_meta() -> StatusMeta {
    StatusMeta::fixed("Desconocido", "grey")
}

/// Returns the display metadata for an event status.
pub fn event_status_meta(status: EventStatus) -> StatusMeta {
    match status {
        EventStatus::Upcoming => StatusMeta::fixed("Próximamente", "grey"),
        EventStatus::OnSale => StatusMeta::fixed("En venta", "success"),
        EventStatus::SoldOut => StatusMeta::fixed("Agotado", "error"),
        EventStatus::Cancelled => StatusMeta::fixed("Cancelado", "error"),
        EventStatus::Finished => StatusMeta::fixed("Finalizado", "secondary"),
    }
}

/// Returns event status metadata for a raw, possibly absent status string.
///
/// Unrecognized values fall back to the raw string with a grey badge.
pub fn event_status_meta_raw(status: Option<&str>) -> StatusMeta {
    let Some(status) = status else {
        return unknown_meta();
    };
    match status {
        "upcoming" => event_status_meta(EventStatus::Upcoming),
        "on_sale" => event_status_meta(EventStatus::OnSale),
        "sold_out" => event_status_meta(EventStatus::SoldOut),
        "cancelled" => event_status_meta(EventStatus::Cancelled),
        "finished" => event_status_meta(EventStatus::Finished),
        other => StatusMeta {
            label: Cow::Owned(other.to_string()),
            color: "grey",
        },
    }
}

/// Returns the display metadata for an event date status.
pub fn event_date_status_meta(status: EventDateStatus) -> StatusMeta {
    match status {
        EventDateStatus::Scheduled => StatusMeta::fixed("Programado", "info"),
        EventDateStatus::OnSale => StatusMeta::fixed("En venta", "success"),
        EventDateStatus::Finished => StatusMeta::fixed("Finalizado", "secondary"),
        EventDateStatus::Cancelled => StatusMeta::fixed("Cancelado", "error"),
    }
}

/// Returns event date status metadata for a raw, possibly absent string.
pub fn event_date_status_meta_raw(status: Option<&str>) -> StatusMeta {
    let Some(status) = status else {
        return unknown_meta();
    };
    match status {
        "scheduled" => event_date_status_meta(EventDateStatus::Scheduled),
        "on_sale" => event_date_status_meta(EventDateStatus::OnSale),
        "finished" => event_date_status_meta(EventDateStatus::Finished),
        "cancelled" => event_date_status_meta(EventDateStatus::Cancelled),
        other => StatusMeta {
            label: Cow::Owned(other.to_string()),
            color: "grey",
        },
    }
}

/// Returns the display metadata for an order status.
pub fn order_status_meta(status: OrderStatus) -> StatusMeta {
    match status {
        OrderStatus::Draft => StatusMeta::fixed("Borrador", "grey"),
        OrderStatus::PendingPayment => StatusMeta::fixed("Pendiente de pago", "warning"),
        OrderStatus::Paid => StatusMeta::fixed("Pagado", "success"),
        OrderStatus::Cancelled => StatusMeta::fixed("Cancelado", "error"),
    }
}

/// Returns order status metadata for a raw, possibly absent status string.
pub fn order_status_meta_raw(status: Option<&str>) -> StatusMeta {
    let Some(status) = status else {
        return unknown_meta();
    };
    match status {
        "draft" => order_status_meta(OrderStatus::Draft),
        "pending_payment" => order_status_meta(OrderStatus::PendingPayment),
        "paid" => order_status_meta(OrderStatus::Paid),
        "cancelled" => order_status_meta(OrderStatus::Cancelled),
        other => StatusMeta {
            label: Cow::Owned(other.to_string()),
            color: "grey",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_labels() {
        assert_eq!(event_status_meta(EventStatus::OnSale).label, "En venta");
        assert_eq!(order_status_meta(OrderStatus::Paid).color, "success");
        assert_eq!(
            event_date_status_meta(EventDateStatus::Scheduled).label,
            "Programado"
        );
    }

    #[test]
    fn absent_status_falls_back_to_unknown() {
        let meta = event_status_meta_raw(None);
        assert_eq!(meta.label, "Desconocido");
        assert_eq!(meta.color, "grey");
    }

    #[test]
    fn unrecognized_status_keeps_raw_label_with_grey_badge() {
        let meta = order_status_meta_raw(Some("refunded"));
        assert_eq!(meta.label, "refunded");
        assert_eq!(meta.color, "grey");
    }
}
