use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a discount code's value is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `value` is a percentage of the order subtotal.
    Percentage,
    /// `value` is a fixed amount in the order currency.
    Fixed,
}

/// A discount code, as managed through the admin endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountCode {
    pub id: i64,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: DiscountType,
    /// Decimal string, interpreted per [`DiscountType`].
    pub value: String,
    pub is_active: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    /// `None` means unlimited uses.
    pub max_uses: Option<u32>,
    pub used_count: u32,
    pub created_at: DateTime<Utc>,
}

impl DiscountCode {
    /// Whether the code has exhausted its allowed uses.
    pub fn is_exhausted(&self) -> bool {
        self.max_uses.is_some_and(|max| self.used_count >= max)
    }
}
