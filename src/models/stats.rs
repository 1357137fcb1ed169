use serde::{Deserialize, Serialize};

/// Sales aggregated per ticket category for one event.
///
/// The backend serializes SQL aggregates as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerCategoryStat {
    pub category_id: i64,
    pub name: String,
    pub tickets_sold: String,
    pub revenue: String,
}

/// Sales aggregated per calendar day for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerDayStat {
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub tickets_sold: String,
    pub revenue: String,
}

/// The sales statistics panel for a single event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStats {
    #[serde(default)]
    pub total_tickets_sold: Option<i64>,
    #[serde(default)]
    pub total_revenue: Option<f64>,
    pub per_category: Vec<PerCategoryStat>,
    pub per_day: Vec<PerDayStat>,
}

/// The admin dashboard headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_events: i64,
    pub events_on_sale: i64,
    pub tickets_sold_today: i64,
    pub revenue_today: f64,
    pub tickets_sold_total: i64,
    pub revenue_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_stats_decodes_string_aggregates() {
        let json = r#"{
            "per_category": [
                {"category_id": 9, "name": "General", "tickets_sold": "40", "revenue": "1000.00"}
            ],
            "per_day": [
                {"date": "2025-02-01", "tickets_sold": "12", "revenue": "300.00"}
            ]
        }"#;

        let stats: EventStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.per_category[0].tickets_sold, "40");
        assert!(stats.total_revenue.is_none());
    }
}
