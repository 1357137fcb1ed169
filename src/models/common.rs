use serde::{Deserialize, Serialize};

/// A page of results in the backend's paginator envelope.
///
/// The backend includes navigation URLs and cursor fields this client does
/// not consume; they are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// The 1-based index of this page.
    pub current_page: u32,
    /// The index of the last page.
    pub last_page: u32,
    /// The page size, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// The total number of items, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_envelope_and_ignores_navigation_urls() {
        let json = r#"{
            "current_page": 2,
            "data": [1, 2, 3],
            "first_page_url": "http://localhost:8000/api/orders?page=1",
            "from": 11,
            "last_page": 5,
            "next_page_url": "http://localhost:8000/api/orders?page=3",
            "prev_page_url": "http://localhost:8000/api/orders?page=1",
            "per_page": 10,
            "to": 13,
            "total": 43
        }"#;

        let page: Paginated<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.last_page, 5);
        assert_eq!(page.per_page, Some(10));
        assert_eq!(page.total, Some(43));
    }

    #[test]
    fn decodes_minimal_envelope() {
        let json = r#"{"data": [], "current_page": 1, "last_page": 1}"#;
        let page: Paginated<u32> = serde_json::from_str(json).unwrap();
        assert!(page.data.is_empty());
        assert!(page.total.is_none());
    }
}
